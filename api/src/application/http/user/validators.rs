use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;
use wasfa_core::domain::user::entities::UserRole;
use wasfa_core::domain::user::value_objects::BulkUserAction;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkUsersValidator {
    #[validate(length(min = 1, message = "ids is required"))]
    pub ids: Vec<Uuid>,

    pub action: BulkUserAction,

    /// Required when the action is `set_role`.
    #[serde(default)]
    pub role: Option<UserRole>,
}
