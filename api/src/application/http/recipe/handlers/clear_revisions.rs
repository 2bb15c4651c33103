use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::recipe::ports::RecipeService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearRevisionsResponse {
    pub deleted: u64,
}

#[utoipa::path(
    delete,
    path = "/{recipe_id}/revisions",
    tag = "recipe",
    summary = "Clear recipe revisions",
    description = "Deletes the recipe's revision history. Owner and admins only.",
    responses(
        (status = 200, body = ClearRevisionsResponse)
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn clear_revisions(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ClearRevisionsResponse>, ApiError> {
    let deleted = state
        .service
        .clear_revisions(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearRevisionsResponse { deleted }))
}
