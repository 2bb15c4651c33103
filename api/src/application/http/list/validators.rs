use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;
use wasfa_core::domain::list::value_objects::BulkListAction;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateListValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateListValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub is_public: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkListsValidator {
    #[validate(length(min = 1, message = "ids is required"))]
    pub ids: Vec<Uuid>,

    pub action: BulkListAction,
}
