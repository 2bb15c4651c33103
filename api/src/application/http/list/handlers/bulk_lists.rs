use crate::application::auth::RequiredIdentity;
use crate::application::http::list::validators::BulkListsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::list::ports::ListService;
use wasfa_core::domain::list::value_objects::BulkListsInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BulkListsResponse {
    pub affected: u64,
}

#[utoipa::path(
    post,
    path = "/bulk",
    tag = "list",
    summary = "Bulk list action",
    description = "Approves, rejects, unpublishes or deletes lists in one batch. Deletion is admin-only and skips default lists.",
    responses(
        (status = 200, body = BulkListsResponse)
    ),
    request_body = BulkListsValidator
)]
pub async fn bulk_lists(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BulkListsValidator>,
) -> Result<Response<BulkListsResponse>, ApiError> {
    let affected = state
        .service
        .bulk_lists(
            identity,
            BulkListsInput {
                ids: payload.ids,
                action: payload.action,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkListsResponse { affected }))
}
