use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::UpdateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::recipe::entities::RecipeDetail;
use wasfa_core::domain::recipe::ports::RecipeService;
use wasfa_core::domain::recipe::value_objects::UpdateRecipeInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateRecipeResponse {
    pub data: RecipeDetail,
}

#[utoipa::path(
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Updates a recipe. An approved recipe edited by its non-privileged owner goes back into review.",
    responses(
        (status = 200, body = UpdateRecipeResponse)
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = UpdateRecipeValidator
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<UpdateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .update_recipe(
            identity,
            UpdateRecipeInput {
                recipe_id,
                name: payload.name,
                image: payload.image,
                servings: payload.servings,
                time_needed: payload.time_needed,
                difficulty: payload.difficulty,
                steps: payload.steps,
                ingredients: payload.ingredients,
                tags: payload.tags,
                city_id: payload.city_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRecipeResponse { data: recipe }))
}
