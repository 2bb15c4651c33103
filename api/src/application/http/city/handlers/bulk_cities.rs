use crate::application::auth::RequiredIdentity;
use crate::application::http::city::validators::BulkCitiesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::city::ports::CityService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BulkCitiesResponse {
    pub deleted: u64,
}

#[utoipa::path(
    post,
    path = "/bulk",
    tag = "city",
    summary = "Bulk delete cities",
    description = "Deletes the given cities, reassigning their recipes to the default city. Moderators only.",
    responses(
        (status = 200, body = BulkCitiesResponse)
    ),
    request_body = BulkCitiesValidator
)]
pub async fn bulk_cities(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BulkCitiesValidator>,
) -> Result<Response<BulkCitiesResponse>, ApiError> {
    let deleted = state
        .service
        .delete_cities(identity, payload.ids)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkCitiesResponse { deleted }))
}
