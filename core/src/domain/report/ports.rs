use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::{
        entities::Report,
        value_objects::{CreateReportInput, GetReportsFilter, UpdateReportInput},
    },
    user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait ReportRepository: Send + Sync {
    fn create(&self, report: Report) -> impl Future<Output = Result<Report, CoreError>> + Send;

    fn update(&self, report: Report) -> impl Future<Output = Result<Report, CoreError>> + Send;

    fn get_by_id(
        &self,
        report_id: Uuid,
    ) -> impl Future<Output = Result<Option<Report>, CoreError>> + Send;

    fn list(
        &self,
        filter: GetReportsFilter,
    ) -> impl Future<Output = Result<Vec<Report>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReportService: Send + Sync {
    /// Any authenticated user may report content they can see.
    fn create_report(
        &self,
        identity: Identity,
        input: CreateReportInput,
    ) -> impl Future<Output = Result<Report, CoreError>> + Send;

    fn get_reports(
        &self,
        identity: Identity,
        filter: GetReportsFilter,
    ) -> impl Future<Output = Result<Vec<Report>, CoreError>> + Send;

    fn update_report(
        &self,
        identity: Identity,
        input: UpdateReportInput,
    ) -> impl Future<Output = Result<Report, CoreError>> + Send;
}
