use crate::application::auth::RequiredIdentity;
use crate::application::http::report::validators::CreateReportValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::report::entities::Report;
use wasfa_core::domain::report::ports::ReportService;
use wasfa_core::domain::report::value_objects::CreateReportInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateReportResponse {
    pub data: Report,
}

#[utoipa::path(
    post,
    path = "",
    tag = "report",
    summary = "Create report",
    description = "Reports a recipe or list the caller can see, or sends general feedback.",
    responses(
        (status = 201, body = CreateReportResponse)
    ),
    request_body = CreateReportValidator
)]
pub async fn create_report(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateReportValidator>,
) -> Result<Response<CreateReportResponse>, ApiError> {
    let report = state
        .service
        .create_report(
            identity,
            CreateReportInput {
                reportable: payload.reportable,
                kind: payload.kind,
                message: payload.message,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateReportResponse { data: report }))
}
