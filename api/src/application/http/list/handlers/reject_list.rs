use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::list::entities::RecipeList;
use wasfa_core::domain::list::ports::ListService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RejectListResponse {
    pub data: RecipeList,
}

#[utoipa::path(
    post,
    path = "/{list_id}/reject",
    tag = "list",
    summary = "Reject list",
    description = "Rejects a pending list, keeping it private. Moderators only.",
    responses(
        (status = 200, body = RejectListResponse)
    ),
    params(
        ("list_id" = Uuid, Path, description = "List ID"),
    ),
)]
pub async fn reject_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RejectListResponse>, ApiError> {
    let list = state
        .service
        .reject_list(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RejectListResponse { data: list }))
}
