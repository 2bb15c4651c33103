use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{
        recipe::{Difficulty, Recipe, RecipeOwner, RecipeStatus},
        sections::Sections,
    },
};
use crate::entity::recipes::Model as RecipeModel;

impl TryFrom<RecipeModel> for Recipe {
    type Error = CoreError;

    fn try_from(model: RecipeModel) -> Result<Self, Self::Error> {
        let owner = match (model.user_id, model.anonymous_author_id) {
            (Some(user_id), _) => RecipeOwner::User(user_id),
            (None, Some(author_id)) => RecipeOwner::Anonymous(author_id),
            (None, None) => {
                error!("recipe {} has no owner columns set", model.id);
                return Err(CoreError::InternalServerError);
            }
        };

        let steps: Sections = serde_json::from_value(model.steps).map_err(|e| {
            error!("recipe {} has unreadable steps: {}", model.id, e);
            CoreError::InternalServerError
        })?;
        let time_needed: Sections = serde_json::from_value(model.time_needed).map_err(|e| {
            error!("recipe {} has unreadable time_needed: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Recipe {
            id: model.id,
            name: model.name,
            slug: model.slug,
            image: model.image,
            servings: model.servings,
            time_needed,
            difficulty: Difficulty::parse(&model.difficulty)?,
            status: RecipeStatus::from(model.status.as_str()),
            needs_reapproval: model.needs_reapproval,
            rejection_reason: model.rejection_reason,
            steps,
            owner,
            city_id: model.city_id,
            approved_by: model.approved_by,
            approved_at: model.approved_at.map(|dt| Utc.from_utc_datetime(&dt)),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        })
    }
}
