use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::user::entities::User;
use wasfa_core::domain::user::ports::UserService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUsersResponse {
    pub data: Vec<User>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "Get users",
    description = "Retrieves all registered accounts. Moderators only.",
    responses(
        (status = 200, body = GetUsersResponse)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetUsersResponse>, ApiError> {
    let users = state
        .service
        .get_users(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUsersResponse { data: users }))
}
