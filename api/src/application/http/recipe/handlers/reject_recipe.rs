use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::RejectRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::recipe::entities::Recipe;
use wasfa_core::domain::recipe::ports::RecipeService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RejectRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/reject",
    tag = "recipe",
    summary = "Reject recipe",
    description = "Rejects a pending recipe with a reason shown to its owner. Moderators only.",
    responses(
        (status = 200, body = RejectRecipeResponse)
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = RejectRecipeValidator
)]
pub async fn reject_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RejectRecipeValidator>,
) -> Result<Response<RejectRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .reject_recipe(identity, recipe_id, payload.reason)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RejectRecipeResponse { data: recipe }))
}
