use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::recipe::entities::Recipe;
use wasfa_core::domain::recipe::ports::RecipeService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApproveRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/approve",
    tag = "recipe",
    summary = "Approve recipe",
    description = "Publishes a pending or rejected recipe, recording the approver. Moderators only.",
    responses(
        (status = 200, body = ApproveRecipeResponse)
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn approve_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ApproveRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .approve_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApproveRecipeResponse { data: recipe }))
}
