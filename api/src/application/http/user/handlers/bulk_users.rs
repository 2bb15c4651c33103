use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::BulkUsersValidator;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::user::ports::UserService;
use wasfa_core::domain::user::value_objects::BulkUsersInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BulkUsersResponse {
    pub affected: u64,
}

#[utoipa::path(
    post,
    path = "/bulk",
    tag = "user",
    summary = "Bulk user action",
    description = "Deletes accounts or changes their role in one batch. Admins only.",
    responses(
        (status = 200, body = BulkUsersResponse)
    ),
    request_body = BulkUsersValidator
)]
pub async fn bulk_users(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BulkUsersValidator>,
) -> Result<Response<BulkUsersResponse>, ApiError> {
    let affected = state
        .service
        .bulk_users(
            identity,
            BulkUsersInput {
                ids: payload.ids,
                action: payload.action,
                role: payload.role,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkUsersResponse { affected }))
}
