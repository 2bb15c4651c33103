use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::recipe::ports::RecipeService;
use wasfa_core::domain::revision::entities::RecipeRevision;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRevisionsResponse {
    pub data: Vec<RecipeRevision>,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}/revisions",
    tag = "recipe",
    summary = "Get recipe revisions",
    description = "Retrieves the recipe's revision history, newest first. Owner and moderators only.",
    responses(
        (status = 200, body = GetRevisionsResponse)
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn get_revisions(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetRevisionsResponse>, ApiError> {
    let revisions = state
        .service
        .get_revisions(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRevisionsResponse { data: revisions }))
}
