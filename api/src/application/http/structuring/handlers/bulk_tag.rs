use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::structuring::validators::BulkTagValidator;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use wasfa_core::domain::structuring::ports::StructuringService;
use wasfa_core::domain::structuring::value_objects::BulkTagOutcome;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct BulkTagResponse {
    pub data: BulkTagOutcome,
}

#[utoipa::path(
    post,
    path = "/bulk-tag",
    tag = "structuring",
    summary = "Bulk retag recipes",
    description = "Regenerates tags for each given recipe from its ingredients, replacing the recipe's tag set. Failures are reported per recipe. Moderators only.",
    responses(
        (status = 200, body = BulkTagResponse)
    ),
    request_body = BulkTagValidator
)]
pub async fn bulk_tag(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BulkTagValidator>,
) -> Result<Response<BulkTagResponse>, ApiError> {
    let outcome = state
        .service
        .bulk_tag(identity, payload.recipe_ids)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkTagResponse { data: outcome }))
}
