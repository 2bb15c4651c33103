use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct StructureContentValidator {
    #[validate(length(min = 1, message = "ingredients_text is required"))]
    pub ingredients_text: String,

    #[validate(length(min = 1, message = "steps_text is required"))]
    pub steps_text: String,

    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkTagValidator {
    #[validate(length(min = 1, message = "recipe_ids is required"))]
    pub recipe_ids: Vec<Uuid>,
}
