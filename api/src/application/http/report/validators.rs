use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use wasfa_core::domain::report::entities::{ReportKind, ReportStatus, Reportable};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportValidator {
    pub reportable: Reportable,

    pub kind: ReportKind,

    #[validate(length(min = 1, max = 2000, message = "message must be 1 to 2000 characters"))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReportValidator {
    #[serde(default)]
    pub status: Option<ReportStatus>,

    #[serde(default)]
    pub admin_note: Option<String>,

    #[serde(default)]
    pub admin_reply: Option<String>,
}
