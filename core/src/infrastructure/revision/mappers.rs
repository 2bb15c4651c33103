use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, revision::entities::RecipeRevision,
};
use crate::entity::recipe_revisions::Model as RevisionModel;

impl TryFrom<RevisionModel> for RecipeRevision {
    type Error = CoreError;

    fn try_from(model: RevisionModel) -> Result<Self, Self::Error> {
        let content = serde_json::from_value(model.content).map_err(|e| {
            error!("revision {} has unreadable content: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(RecipeRevision {
            id: model.id,
            recipe_id: model.recipe_id,
            user_id: model.user_id,
            content,
            change_summary: model.change_summary,
            created_at: Utc.from_utc_datetime(&model.created_at),
        })
    }
}
