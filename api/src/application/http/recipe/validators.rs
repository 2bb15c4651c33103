use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;
use wasfa_core::domain::recipe::value_objects::{
    BulkRecipeAction, IngredientsInput, SectionsInput,
};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnonymousAuthorValidator {
    #[validate(length(min = 1, message = "author name is required"))]
    pub name: String,

    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub servings: Option<String>,

    /// Free-form string, flat list, group list or group map.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub time_needed: Option<SectionsInput>,

    #[validate(length(min = 1, message = "difficulty is required"))]
    pub difficulty: String,

    #[schema(value_type = Object)]
    pub steps: SectionsInput,

    #[schema(value_type = Object)]
    pub ingredients: IngredientsInput,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub city_id: Option<Uuid>,

    /// Moderator-only: credit a named non-registered author.
    #[serde(default)]
    #[validate(nested)]
    pub anonymous_author: Option<AnonymousAuthorValidator>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub servings: Option<String>,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub time_needed: Option<SectionsInput>,

    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub steps: Option<SectionsInput>,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub ingredients: Option<IngredientsInput>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub city_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RejectRecipeValidator {
    #[validate(length(min = 1, max = 500, message = "reason must be 1 to 500 characters"))]
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkRecipesValidator {
    #[validate(length(min = 1, message = "ids is required"))]
    pub ids: Vec<Uuid>,

    pub action: BulkRecipeAction,

    /// Required when the action is `reject`.
    #[serde(default)]
    pub reason: Option<String>,
}
