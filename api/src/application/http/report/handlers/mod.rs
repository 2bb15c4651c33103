pub mod create_report;
pub mod get_reports;
pub mod update_report;
