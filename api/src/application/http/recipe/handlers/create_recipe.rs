use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::CreateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::recipe::entities::RecipeDetail;
use wasfa_core::domain::recipe::ports::RecipeService;
use wasfa_core::domain::recipe::value_objects::{AnonymousAuthorInput, CreateRecipeInput};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRecipeResponse {
    pub data: RecipeDetail,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    description = "Submits a recipe. Moderator submissions publish immediately; everyone else starts in review.",
    responses(
        (status = 201, body = CreateRecipeResponse)
    ),
    request_body = CreateRecipeValidator
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(
            identity,
            CreateRecipeInput {
                name: payload.name,
                image: payload.image,
                servings: payload.servings,
                time_needed: payload.time_needed,
                difficulty: payload.difficulty,
                steps: payload.steps,
                ingredients: payload.ingredients,
                tags: payload.tags,
                city_id: payload.city_id,
                anonymous_author: payload.anonymous_author.map(|author| AnonymousAuthorInput {
                    name: author.name,
                    bio: author.bio,
                }),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}
