use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{IngredientGroupInput, SectionGroupInput},
    settings::entities::SiteSettings,
};

/// Per-call credentials for the completion API. They live in the runtime
/// settings store so operators can rotate the key without a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmCredentials {
    pub api_key: String,
    pub model: String,
}

impl LlmCredentials {
    pub fn from_settings(settings: &SiteSettings) -> Result<Self, CoreError> {
        let api_key = settings
            .gemini_api_key
            .clone()
            .ok_or_else(|| CoreError::Configuration("no Gemini API key configured".to_string()))?;
        Ok(Self {
            api_key,
            model: settings.gemini_model.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct StructureContentInput {
    pub ingredients_text: String,
    pub steps_text: String,
    pub locale: Option<String>,
}

/// The model's structured reading of free-form recipe text, in the same
/// group shapes recipe submission accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredContent {
    #[serde(default)]
    pub ingredient_groups: Vec<IngredientGroupInput>,
    #[serde(default)]
    pub step_groups: Vec<SectionGroupInput>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Tag-list-only reply shape used by bulk retagging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagReply {
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BulkTagError {
    pub recipe_id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BulkTagOutcome {
    pub success_count: u64,
    pub total: u64,
    pub errors: Vec<BulkTagError>,
}

/// Drops a markdown code fence wrapping, with or without a language tag.
/// Anything else passes through untouched.
pub fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // The first line after the opening fence may be a language tag.
    let rest = match rest.split_once('\n') {
        Some((first, body)) if first.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body,
        _ => rest,
    };
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        assert_eq!(
            strip_code_fences("```json\n{\"tags\": []}\n```"),
            "{\"tags\": []}"
        );
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fences("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn unfenced_reply_passes_through() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn unbalanced_fence_is_left_alone() {
        assert_eq!(strip_code_fences("```json\n{}"), "```json\n{}");
    }

    #[test]
    fn credentials_require_an_api_key() {
        let settings = SiteSettings::default();
        assert!(matches!(
            LlmCredentials::from_settings(&settings),
            Err(CoreError::Configuration(_))
        ));

        let settings = SiteSettings {
            gemini_api_key: Some("key".to_string()),
            ..SiteSettings::default()
        };
        let credentials = LlmCredentials::from_settings(&settings).unwrap();
        assert_eq!(credentials.model, settings.gemini_model);
    }

    #[test]
    fn structured_reply_parses_camel_case() {
        let reply = r#"{
            "ingredientGroups": [{"items": [{"name": "برغل", "amount": "2", "unit": "كوب"}]}],
            "stepGroups": [{"name": "التحضير", "items": ["انقعي البرغل"]}],
            "tags": ["كبة"]
        }"#;
        let parsed: StructuredContent = serde_json::from_str(reply).unwrap();
        assert_eq!(parsed.ingredient_groups.len(), 1);
        assert_eq!(parsed.step_groups[0].items.len(), 1);
        assert_eq!(parsed.tags, vec!["كبة".to_string()]);
    }
}
