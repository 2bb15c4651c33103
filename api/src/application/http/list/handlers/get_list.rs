use crate::application::auth::OptionalIdentity;
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
pub struct GetListResponse {
    pub data: RecipeList,
}

#[utoipa::path(
    get,
    path = "/{list_id}",
    tag = "list",
    summary = "Get list",
    description = "Retrieves a list. Non-public lists resolve only for their owner and moderators.",
    responses(
        (status = 200, body = GetListResponse)
    ),
    params(
        ("list_id" = Uuid, Path, description = "List ID"),
    ),
)]
pub async fn get_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<GetListResponse>, ApiError> {
    let list = state
        .service
        .get_list(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetListResponse { data: list }))
}
