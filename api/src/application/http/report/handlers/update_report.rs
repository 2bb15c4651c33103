use crate::application::auth::RequiredIdentity;
use crate::application::http::report::validators::UpdateReportValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::report::entities::Report;
use wasfa_core::domain::report::ports::ReportService;
use wasfa_core::domain::report::value_objects::UpdateReportInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateReportResponse {
    pub data: Report,
}

#[utoipa::path(
    put,
    path = "/{report_id}",
    tag = "report",
    summary = "Update report",
    description = "Resolves a report: status, internal note and the reply shown to the reporter. Moderators only.",
    responses(
        (status = 200, body = UpdateReportResponse)
    ),
    params(
        ("report_id" = Uuid, Path, description = "Report ID"),
    ),
    request_body = UpdateReportValidator
)]
pub async fn update_report(
    Path(report_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateReportValidator>,
) -> Result<Response<UpdateReportResponse>, ApiError> {
    let report = state
        .service
        .update_report(
            identity,
            UpdateReportInput {
                report_id,
                status: payload.status,
                admin_note: payload.admin_note,
                admin_reply: payload.admin_reply,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateReportResponse { data: report }))
}
