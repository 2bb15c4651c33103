use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use wasfa_core::domain::report::entities::{Report, ReportStatus};
use wasfa_core::domain::report::ports::ReportService;
use wasfa_core::domain::report::value_objects::GetReportsFilter;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetReportsQuery {
    pub status: Option<ReportStatus>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReportsResponse {
    pub data: Vec<Report>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "report",
    summary = "Get reports",
    description = "Retrieves reports, newest first, optionally filtered by status. Moderators only.",
    params(GetReportsQuery),
    responses(
        (status = 200, body = GetReportsResponse)
    ),
)]
pub async fn get_reports(
    Query(query): Query<GetReportsQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetReportsResponse>, ApiError> {
    let reports = state
        .service
        .get_reports(
            identity,
            GetReportsFilter {
                status: query.status,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetReportsResponse { data: reports }))
}
