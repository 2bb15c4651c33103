use super::handlers::create_report::{__path_create_report, create_report};
use super::handlers::get_reports::{__path_get_reports, get_reports};
use super::handlers::update_report::{__path_update_report, update_report};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_report, get_reports, update_report))]
pub struct ReportApiDoc;

pub fn report_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{}/reports", root_path), post(create_report))
        .route(&format!("{}/reports", root_path), get(get_reports))
        .route(
            &format!("{}/reports/{{report_id}}", root_path),
            put(update_report),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
