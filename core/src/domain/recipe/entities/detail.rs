use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::entities::{
    recipe::{Difficulty, RecipeStatus},
    sections::Sections,
};
use crate::domain::tag::entities::Tag;

/// The public "full recipe" representation. This exact shape is what the
/// read API returns and what the revision recorder snapshots, so a revision
/// replays as a complete point-in-time view. `city_id` and the owner ids
/// ride along with the denormalized display fields to keep restores exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetail {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub city: Option<String>,
    pub city_slug: Option<String>,
    pub city_id: Option<Uuid>,
    pub time_needed: Sections,
    pub difficulty: Difficulty,
    pub author_name: String,
    pub tags: Vec<Tag>,
    pub servings: Option<String>,
    pub ingredients: Vec<RecipeIngredientDetail>,
    pub steps: Sections,
    pub is_anonymous: bool,
    pub user: Option<RecipeUser>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: RecipeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientDetail {
    pub name: String,
    pub amount: Option<String>,
    pub unit: Option<String>,
    pub descriptor: Option<String>,
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeUser {
    pub id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
}
