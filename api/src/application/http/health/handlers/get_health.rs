use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::health::ports::HealthCheckService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHealthResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Pings the database and reports readiness.",
    responses(
        (status = 200, body = GetHealthResponse)
    ),
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<GetHealthResponse>, ApiError> {
    state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetHealthResponse {
        status: "ok".to_string(),
    }))
}
