use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkTagsValidator {
    #[validate(length(min = 1, message = "ids is required"))]
    pub ids: Vec<Uuid>,
}
