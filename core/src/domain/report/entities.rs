use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

pub const MAX_REPORT_MESSAGE_LEN: usize = 2000;

/// What a report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Reportable {
    Recipe(Uuid),
    List(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    ContentIssue,
    Feedback,
}

impl ReportKind {
    pub fn as_str(&self) -> &str {
        match self {
            ReportKind::ContentIssue => "content_issue",
            ReportKind::Feedback => "feedback",
        }
    }
}

impl From<&str> for ReportKind {
    fn from(s: &str) -> Self {
        match s {
            "feedback" => ReportKind::Feedback,
            _ => ReportKind::ContentIssue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Fixed,
    Rejected,
}

impl ReportStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Fixed => "fixed",
            ReportStatus::Rejected => "rejected",
        }
    }
}

impl From<&str> for ReportStatus {
    fn from(s: &str) -> Self {
        match s {
            "fixed" => ReportStatus::Fixed,
            "rejected" => ReportStatus::Rejected,
            _ => ReportStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reportable: Reportable,
    pub kind: ReportKind,
    pub message: String,
    pub status: ReportStatus,
    pub admin_note: Option<String>,
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn new(user_id: Uuid, reportable: Reportable, kind: ReportKind, message: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            user_id,
            reportable,
            kind,
            message,
            status: ReportStatus::Pending,
            admin_note: None,
            admin_reply: None,
            created_at: Utc::now(),
        }
    }

    pub fn resolve(
        &mut self,
        status: Option<ReportStatus>,
        admin_note: Option<String>,
        admin_reply: Option<String>,
    ) {
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(note) = admin_note {
            self.admin_note = Some(note);
        }
        if let Some(reply) = admin_reply {
            self.admin_reply = Some(reply);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_starts_pending() {
        let report = Report::new(
            Uuid::new_v4(),
            Reportable::Recipe(Uuid::new_v4()),
            ReportKind::ContentIssue,
            "وصفة مكررة".to_string(),
        );
        assert_eq!(report.status, ReportStatus::Pending);
        assert!(report.admin_note.is_none());
    }

    #[test]
    fn resolve_keeps_untouched_fields() {
        let mut report = Report::new(
            Uuid::new_v4(),
            Reportable::List(Uuid::new_v4()),
            ReportKind::Feedback,
            "suggestion".to_string(),
        );
        report.resolve(Some(ReportStatus::Fixed), Some("done".to_string()), None);
        assert_eq!(report.status, ReportStatus::Fixed);
        assert_eq!(report.admin_note.as_deref(), Some("done"));
        assert!(report.admin_reply.is_none());

        report.resolve(None, None, Some("thanks".to_string()));
        assert_eq!(report.status, ReportStatus::Fixed);
        assert_eq!(report.admin_reply.as_deref(), Some("thanks"));
    }
}
