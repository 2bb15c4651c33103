use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::list::entities::RecipeList;
use wasfa_core::domain::list::ports::ListService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetListsResponse {
    pub data: Vec<RecipeList>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "list",
    summary = "Get lists",
    description = "Retrieves the caller's lists, creating the default favorites list on first access.",
    responses(
        (status = 200, body = GetListsResponse)
    ),
)]
pub async fn get_lists(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetListsResponse>, ApiError> {
    let lists = state
        .service
        .get_lists(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetListsResponse { data: lists }))
}
