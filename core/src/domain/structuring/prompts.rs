//! Prompt and response-schema builders for the structuring calls. The tag
//! vocabulary is embedded verbatim so the model proposes only names the
//! taxonomy already knows.

use serde_json::json;

use crate::domain::tag::entities::Tag;

pub fn structure_prompt(
    ingredients_text: &str,
    steps_text: &str,
    locale: Option<&str>,
    vocabulary: &[Tag],
) -> String {
    let locale = locale.unwrap_or("ar");
    let vocabulary = tag_names(vocabulary);
    format!(
        "You are structuring a user-submitted recipe written in locale \"{locale}\".\n\
         Parse the raw text below into ingredient groups (name, amount, unit, descriptor \
         per item) and step groups, keeping the original wording and order.\n\
         Suggest tags ONLY from this vocabulary: [{vocabulary}].\n\
         Reply with JSON only.\n\n\
         INGREDIENTS:\n{ingredients_text}\n\n\
         STEPS:\n{steps_text}"
    )
}

pub fn structure_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredientGroups": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "nullable": true },
                        "items": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "amount": { "type": "string", "nullable": true },
                                    "unit": { "type": "string", "nullable": true },
                                    "descriptor": { "type": "string", "nullable": true }
                                },
                                "required": ["name"]
                            }
                        }
                    },
                    "required": ["items"]
                }
            },
            "stepGroups": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "nullable": true },
                        "items": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["items"]
                }
            },
            "tags": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["ingredientGroups", "stepGroups", "tags"]
    })
}

pub fn tag_prompt(
    recipe_name: &str,
    ingredients_text: &str,
    vocabulary: &[Tag],
    current_tags: &[Tag],
) -> String {
    let vocabulary = tag_names(vocabulary);
    let current = tag_names(current_tags);
    format!(
        "Pick the tags that fit this recipe. Choose ONLY from this vocabulary: \
         [{vocabulary}].\n\
         Keep any current tag that still fits: [{current}].\n\
         Reply with JSON only.\n\n\
         RECIPE: {recipe_name}\n\
         INGREDIENTS: {ingredients_text}"
    )
}

pub fn tag_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "tags": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["tags"]
    })
}

fn tag_names(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vec<Tag> {
        vec![Tag::new("حلويات".to_string()), Tag::new("شوربة".to_string())]
    }

    #[test]
    fn structure_prompt_embeds_the_vocabulary() {
        let prompt = structure_prompt("بصل، ثوم", "اقلي البصل", None, &vocab());
        assert!(prompt.contains("حلويات, شوربة"));
        assert!(prompt.contains("بصل، ثوم"));
        assert!(prompt.contains("\"ar\""));
    }

    #[test]
    fn tag_prompt_lists_current_tags() {
        let current = vec![Tag::new("شوربة".to_string())];
        let prompt = tag_prompt("شوربة عدس", "عدس، بصل", &vocab(), &current);
        assert!(prompt.contains("شوربة عدس"));
        assert!(prompt.contains("[شوربة]"));
    }

    #[test]
    fn schemas_name_their_required_fields() {
        let schema = structure_response_schema();
        assert_eq!(schema["required"][0], "ingredientGroups");
        let schema = tag_response_schema();
        assert_eq!(schema["required"][0], "tags");
    }
}
