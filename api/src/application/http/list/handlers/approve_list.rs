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
pub struct ApproveListResponse {
    pub data: RecipeList,
}

#[utoipa::path(
    post,
    path = "/{list_id}/approve",
    tag = "list",
    summary = "Approve list",
    description = "Approves a pending list and makes it public. Moderators only.",
    responses(
        (status = 200, body = ApproveListResponse)
    ),
    params(
        ("list_id" = Uuid, Path, description = "List ID"),
    ),
)]
pub async fn approve_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ApproveListResponse>, ApiError> {
    let list = state
        .service
        .approve_list(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApproveListResponse { data: list }))
}
