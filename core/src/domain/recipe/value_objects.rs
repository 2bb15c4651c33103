use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::sections::{Section, Sections},
};

/// One ingredient line as submitted. `deny_unknown_fields` keeps the
/// untagged input enums honest: a group object never half-matches as an
/// item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientItemInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub descriptor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientGroupInput {
    #[serde(default)]
    pub name: Option<String>,
    pub items: Vec<IngredientItemInput>,
}

/// The three wire shapes stored content has used over the years: an
/// ordered group list, a flat item list, and a group-name-keyed map.
/// Everything funnels through [`IngredientsInput::canonicalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientsInput {
    Grouped(Vec<IngredientGroupInput>),
    Flat(Vec<IngredientItemInput>),
    Keyed(serde_json::Map<String, serde_json::Value>),
}

/// Canonical form: ordered groups; the flat legacy shape becomes a single
/// unnamed group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientGroup {
    pub name: Option<String>,
    pub items: Vec<IngredientItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientItem {
    pub name: String,
    pub amount: Option<String>,
    pub unit: Option<String>,
    pub descriptor: Option<String>,
}

fn canonical_item(input: IngredientItemInput) -> Option<IngredientItem> {
    // Items without a resolvable name are skipped, not an error.
    let name = input.name?.trim().to_string();
    if name.is_empty() {
        return None;
    }
    Some(IngredientItem {
        name,
        amount: input.amount,
        unit: input.unit,
        descriptor: input.descriptor,
    })
}

fn group_name(raw: Option<String>) -> Option<String> {
    raw.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

impl IngredientsInput {
    pub fn canonicalize(self) -> Result<Vec<IngredientGroup>, CoreError> {
        match self {
            IngredientsInput::Flat(items) => Ok(vec![IngredientGroup {
                name: None,
                items: items.into_iter().filter_map(canonical_item).collect(),
            }]),
            IngredientsInput::Grouped(groups) => Ok(groups
                .into_iter()
                .map(|g| IngredientGroup {
                    name: group_name(g.name),
                    items: g.items.into_iter().filter_map(canonical_item).collect(),
                })
                .collect()),
            IngredientsInput::Keyed(map) => {
                let mut groups = Vec::with_capacity(map.len());
                for (name, value) in map {
                    let items: Vec<IngredientItemInput> = serde_json::from_value(value)
                        .map_err(|e| {
                            CoreError::Validation(format!(
                                "ingredient group {name:?} is not an item list: {e}"
                            ))
                        })?;
                    groups.push(IngredientGroup {
                        name: group_name(Some(name)),
                        items: items.into_iter().filter_map(canonical_item).collect(),
                    });
                }
                Ok(groups)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionGroupInput {
    #[serde(default)]
    pub name: Option<String>,
    pub items: Vec<String>,
}

/// Wire shapes for steps and preparation times: a single free-form string,
/// a flat ordered list, an ordered group list, or a group-name-keyed map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionsInput {
    Text(String),
    Grouped(Vec<SectionGroupInput>),
    Flat(Vec<String>),
    Keyed(serde_json::Map<String, serde_json::Value>),
}

impl SectionsInput {
    pub fn canonicalize(self) -> Result<Sections, CoreError> {
        match self {
            SectionsInput::Text(text) => {
                let text = text.trim().to_string();
                let items = if text.is_empty() { vec![] } else { vec![text] };
                Ok(Sections(vec![Section { name: None, items }]))
            }
            SectionsInput::Flat(items) => Ok(Sections(vec![Section { name: None, items }])),
            SectionsInput::Grouped(groups) => Ok(Sections(
                groups
                    .into_iter()
                    .map(|g| Section {
                        name: group_name(g.name),
                        items: g.items,
                    })
                    .collect(),
            )),
            SectionsInput::Keyed(map) => {
                let mut sections = Vec::with_capacity(map.len());
                for (name, value) in map {
                    let items: Vec<String> = serde_json::from_value(value).map_err(|e| {
                        CoreError::Validation(format!(
                            "section {name:?} is not a string list: {e}"
                        ))
                    })?;
                    sections.push(Section {
                        name: group_name(Some(name)),
                        items,
                    });
                }
                Ok(Sections(sections))
            }
        }
    }
}

/// One pivot row ready to persist. A sync call fully replaces the recipe's
/// prior set with these rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredientRow {
    pub ingredient_id: Uuid,
    pub amount: Option<String>,
    pub unit: Option<String>,
    pub descriptor: Option<String>,
    pub group: Option<String>,
    pub sort_order: i32,
}

/// Collapses resolved rows to one per ingredient id. Duplicate names inside
/// one recipe are not supported by sync-by-id: the last occurrence wins,
/// keeping the first occurrence's position. Sort order is reindexed densely.
pub fn collapse_ingredient_rows(rows: Vec<RecipeIngredientRow>) -> Vec<RecipeIngredientRow> {
    let mut out: Vec<RecipeIngredientRow> = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(existing) = out.iter_mut().find(|r| r.ingredient_id == row.ingredient_id) {
            let sort_order = existing.sort_order;
            *existing = RecipeIngredientRow { sort_order, ..row };
        } else {
            out.push(row);
        }
    }
    for (index, row) in out.iter_mut().enumerate() {
        row.sort_order = index as i32;
    }
    out
}

#[derive(Debug, Clone)]
pub struct AnonymousAuthorInput {
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateRecipeInput {
    pub name: String,
    pub image: Option<String>,
    pub servings: Option<String>,
    pub time_needed: Option<SectionsInput>,
    pub difficulty: String,
    pub steps: SectionsInput,
    pub ingredients: IngredientsInput,
    pub tags: Vec<String>,
    pub city_id: Option<Uuid>,
    /// Moderator-only: credit the recipe to a named non-registered author
    /// instead of the submitting account.
    pub anonymous_author: Option<AnonymousAuthorInput>,
}

#[derive(Debug, Clone)]
pub struct UpdateRecipeInput {
    pub recipe_id: Uuid,
    pub name: Option<String>,
    pub image: Option<String>,
    pub servings: Option<String>,
    pub time_needed: Option<SectionsInput>,
    pub difficulty: Option<String>,
    pub steps: Option<SectionsInput>,
    pub ingredients: Option<IngredientsInput>,
    pub tags: Option<Vec<String>>,
    pub city_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub status: Option<crate::domain::recipe::entities::recipe::RecipeStatus>,
    pub city_id: Option<Uuid>,
    pub tag_id: Option<Uuid>,
    pub search: Option<String>,
    pub owner_user_id: Option<Uuid>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BulkRecipeAction {
    Approve,
    Reject,
    Unpublish,
    Delete,
}

#[derive(Debug, Clone)]
pub struct BulkRecipesInput {
    pub ids: Vec<Uuid>,
    pub action: BulkRecipeAction,
    /// Required when the action is `Reject`.
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_ingredient_list_becomes_one_unnamed_group() {
        let input: IngredientsInput = serde_json::from_value(json!([
            {"name": "Bulgur", "amount": "2", "unit": "cup"},
            {"name": "بصل", "descriptor": "مفروم"}
        ]))
        .unwrap();

        let groups = input.canonicalize().unwrap();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].name.is_none());
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].items[0].name, "Bulgur");
        assert_eq!(groups[0].items[0].amount.as_deref(), Some("2"));
    }

    #[test]
    fn grouped_ingredient_list_keeps_group_order() {
        let input: IngredientsInput = serde_json::from_value(json!([
            {"name": "العجينة", "items": [{"name": "برغل"}]},
            {"name": "الحشوة", "items": [{"name": "لحم مفروم"}, {"name": "صنوبر"}]}
        ]))
        .unwrap();

        let groups = input.canonicalize().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name.as_deref(), Some("العجينة"));
        assert_eq!(groups[1].items.len(), 2);
    }

    #[test]
    fn keyed_ingredient_map_becomes_named_groups() {
        let input: IngredientsInput = serde_json::from_value(json!({
            "Dough": [{"name": "flour", "amount": "3", "unit": "cup"}],
            "Filling": [{"name": "cheese"}]
        }))
        .unwrap();

        let groups = input.canonicalize().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name.as_deref(), Some("Dough"));
        assert_eq!(groups[1].name.as_deref(), Some("Filling"));
    }

    #[test]
    fn nameless_ingredient_items_are_skipped_silently() {
        let input: IngredientsInput = serde_json::from_value(json!([
            {"amount": "1"},
            {"name": "  "},
            {"name": "سكر"}
        ]))
        .unwrap();

        let groups = input.canonicalize().unwrap();
        assert_eq!(groups[0].items.len(), 1);
        assert_eq!(groups[0].items[0].name, "سكر");
    }

    #[test]
    fn sections_accept_all_four_wire_shapes() {
        let text: SectionsInput = serde_json::from_value(json!("30 دقيقة")).unwrap();
        assert_eq!(text.canonicalize().unwrap().flatten(), vec!["30 دقيقة"]);

        let flat: SectionsInput = serde_json::from_value(json!(["soak", "mix"])).unwrap();
        let flat = flat.canonicalize().unwrap();
        assert_eq!(flat.0.len(), 1);
        assert_eq!(flat.flatten(), vec!["soak", "mix"]);

        let grouped: SectionsInput =
            serde_json::from_value(json!([{"name": "التحضير", "items": ["انقع البرغل"]}]))
                .unwrap();
        let grouped = grouped.canonicalize().unwrap();
        assert_eq!(grouped.0[0].name.as_deref(), Some("التحضير"));

        let keyed: SectionsInput =
            serde_json::from_value(json!({"Prep": ["soak"], "Cook": ["fry"]})).unwrap();
        assert_eq!(keyed.canonicalize().unwrap().0.len(), 2);
    }

    #[test]
    fn malformed_keyed_section_value_is_a_validation_error() {
        let keyed: SectionsInput =
            serde_json::from_value(json!({"Prep": "not a list"})).unwrap();
        assert!(matches!(
            keyed.canonicalize(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn collapse_keeps_last_write_per_ingredient_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![
            RecipeIngredientRow {
                ingredient_id: a,
                amount: Some("1".into()),
                unit: Some("cup".into()),
                descriptor: None,
                group: None,
                sort_order: 0,
            },
            RecipeIngredientRow {
                ingredient_id: b,
                amount: None,
                unit: None,
                descriptor: None,
                group: None,
                sort_order: 1,
            },
            RecipeIngredientRow {
                ingredient_id: a,
                amount: Some("2".into()),
                unit: Some("tbsp".into()),
                descriptor: Some("melted".into()),
                group: Some("Topping".into()),
                sort_order: 2,
            },
        ];

        let collapsed = collapse_ingredient_rows(rows);
        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[0].ingredient_id, a);
        assert_eq!(collapsed[0].amount.as_deref(), Some("2"));
        assert_eq!(collapsed[0].group.as_deref(), Some("Topping"));
        assert_eq!(collapsed[0].sort_order, 0);
        assert_eq!(collapsed[1].ingredient_id, b);
        assert_eq!(collapsed[1].sort_order, 1);
    }

    #[test]
    fn bulk_action_exposes_an_openapi_schema() {
        // Bulk request bodies embed the action enum, so it must carry a
        // schema of its own.
        let _ = <BulkRecipeAction as utoipa::PartialSchema>::schema();
    }
}
