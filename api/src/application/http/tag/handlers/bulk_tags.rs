use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::tag::validators::BulkTagsValidator;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::tag::ports::TagService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BulkTagsResponse {
    pub deleted: u64,
}

#[utoipa::path(
    post,
    path = "/bulk",
    tag = "tag",
    summary = "Bulk delete tags",
    description = "Deletes the given tags and detaches them from every recipe. Moderators only.",
    responses(
        (status = 200, body = BulkTagsResponse)
    ),
    request_body = BulkTagsValidator
)]
pub async fn bulk_tags(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BulkTagsValidator>,
) -> Result<Response<BulkTagsResponse>, ApiError> {
    let deleted = state
        .service
        .delete_tags(identity, payload.ids)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkTagsResponse { deleted }))
}
