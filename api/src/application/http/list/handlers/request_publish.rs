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
pub struct RequestPublishResponse {
    pub data: RecipeList,
}

#[utoipa::path(
    post,
    path = "/{list_id}/request-publish",
    tag = "list",
    summary = "Request list publication",
    description = "Submits a non-empty list for moderation review.",
    responses(
        (status = 200, body = RequestPublishResponse)
    ),
    params(
        ("list_id" = Uuid, Path, description = "List ID"),
    ),
)]
pub async fn request_publish(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RequestPublishResponse>, ApiError> {
    let list = state
        .service
        .request_publish(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RequestPublishResponse { data: list }))
}
