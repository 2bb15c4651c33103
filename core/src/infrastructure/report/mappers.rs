use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::entities::{Report, ReportKind, ReportStatus, Reportable},
};
use crate::entity::reports::Model as ReportModel;

impl TryFrom<ReportModel> for Report {
    type Error = CoreError;

    fn try_from(model: ReportModel) -> Result<Self, Self::Error> {
        let reportable = match model.reportable_type.as_str() {
            "recipe" => Reportable::Recipe(model.reportable_id),
            "list" => Reportable::List(model.reportable_id),
            other => {
                error!("report {} has unknown reportable type {}", model.id, other);
                return Err(CoreError::InternalServerError);
            }
        };

        Ok(Report {
            id: model.id,
            user_id: model.user_id,
            reportable,
            kind: ReportKind::from(model.kind.as_str()),
            message: model.message,
            status: ReportStatus::from(model.status.as_str()),
            admin_note: model.admin_note,
            admin_reply: model.admin_reply,
            created_at: Utc.from_utc_datetime(&model.created_at),
        })
    }
}

pub fn reportable_columns(reportable: &Reportable) -> (&'static str, uuid::Uuid) {
    match reportable {
        Reportable::Recipe(id) => ("recipe", *id),
        Reportable::List(id) => ("list", *id),
    }
}
