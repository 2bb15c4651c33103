use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateListInput {
    pub name: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateListInput {
    pub list_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub is_public: Option<bool>,
}

/// Outcome of a membership toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BulkListAction {
    Approve,
    Reject,
    Unpublish,
    Delete,
}

#[derive(Debug, Clone)]
pub struct BulkListsInput {
    pub ids: Vec<Uuid>,
    pub action: BulkListAction,
}
