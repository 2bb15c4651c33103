use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_uuid_v7, recipe::entities::RecipeDetail};

pub const SUMMARY_INITIAL: &str = "Initial creation";
pub const SUMMARY_UPDATE: &str = "Update";

/// Append-only snapshot of the full rendered recipe, captured after every
/// successful create or update. History grows unbounded until the owner or
/// a moderator with delete privilege clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRevision {
    pub id: Uuid,
    pub recipe_id: Uuid,
    /// Who made the edit; absent for system-side writes.
    pub user_id: Option<Uuid>,
    pub content: RecipeDetail,
    pub change_summary: String,
    pub created_at: DateTime<Utc>,
}

impl RecipeRevision {
    pub fn new(
        recipe_id: Uuid,
        user_id: Option<Uuid>,
        content: RecipeDetail,
        change_summary: String,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            recipe_id,
            user_id,
            content,
            change_summary,
            created_at: Utc::now(),
        }
    }
}
