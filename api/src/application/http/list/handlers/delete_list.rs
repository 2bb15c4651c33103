use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::list::ports::ListService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteListResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{list_id}",
    tag = "list",
    summary = "Delete list",
    description = "Deletes a list and its memberships. The default favorites list cannot be deleted.",
    responses(
        (status = 200, body = DeleteListResponse)
    ),
    params(
        ("list_id" = Uuid, Path, description = "List ID"),
    ),
)]
pub async fn delete_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteListResponse>, ApiError> {
    state
        .service
        .delete_list(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteListResponse {
        message: "List deleted successfully".to_string(),
    }))
}
