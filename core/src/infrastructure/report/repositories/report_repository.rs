use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::{
        entities::Report,
        ports::ReportRepository,
        value_objects::GetReportsFilter,
    },
};
use crate::entity::reports::{
    ActiveModel as ReportActiveModel, Column as ReportColumn, Entity as ReportEntity,
};
use crate::infrastructure::report::mappers::reportable_columns;

#[derive(Debug, Clone)]
pub struct PostgresReportRepository {
    pub db: DatabaseConnection,
}

impl PostgresReportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(report: &Report) -> ReportActiveModel {
    let (reportable_type, reportable_id) = reportable_columns(&report.reportable);
    ReportActiveModel {
        id: Set(report.id),
        user_id: Set(report.user_id),
        reportable_type: Set(reportable_type.to_string()),
        reportable_id: Set(reportable_id),
        kind: Set(report.kind.as_str().to_string()),
        message: Set(report.message.clone()),
        status: Set(report.status.as_str().to_string()),
        admin_note: Set(report.admin_note.clone()),
        admin_reply: Set(report.admin_reply.clone()),
        created_at: Set(report.created_at.naive_utc()),
    }
}

impl ReportRepository for PostgresReportRepository {
    async fn create(&self, report: Report) -> Result<Report, CoreError> {
        let model = ReportEntity::insert(active_model(&report))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create report: {}", e);
                CoreError::InternalServerError
            })?;

        Report::try_from(model)
    }

    async fn update(&self, report: Report) -> Result<Report, CoreError> {
        let model = ReportEntity::update(active_model(&report))
            .filter(ReportColumn::Id.eq(report.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update report: {}", e);
                CoreError::InternalServerError
            })?;

        Report::try_from(model)
    }

    async fn get_by_id(&self, report_id: Uuid) -> Result<Option<Report>, CoreError> {
        ReportEntity::find_by_id(report_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get report by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Report::try_from)
            .transpose()
    }

    async fn list(&self, filter: GetReportsFilter) -> Result<Vec<Report>, CoreError> {
        let mut query = ReportEntity::find();

        if let Some(status) = filter.status {
            query = query.filter(ReportColumn::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(ReportColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list reports: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Report::try_from)
            .collect()
    }
}
