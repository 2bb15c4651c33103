use uuid::Uuid;

use crate::domain::report::entities::{Reportable, ReportKind, ReportStatus};

#[derive(Debug, Clone)]
pub struct CreateReportInput {
    pub reportable: Reportable,
    pub kind: ReportKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct UpdateReportInput {
    pub report_id: Uuid,
    pub status: Option<ReportStatus>,
    pub admin_note: Option<String>,
    pub admin_reply: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetReportsFilter {
    pub status: Option<ReportStatus>,
}
