use chrono::{TimeZone, Utc};

use crate::domain::list::entities::{ListStatus, RecipeList};
use crate::entity::recipe_lists::Model as ListModel;

impl From<ListModel> for RecipeList {
    fn from(model: ListModel) -> Self {
        RecipeList {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            cover_image: model.cover_image,
            is_default: model.is_default,
            is_public: model.is_public,
            status: ListStatus::from(model.status.as_str()),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}
