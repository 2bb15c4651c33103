use super::handlers::get_health::get_health;
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/health", state.args.server.root_path),
        get(get_health),
    )
}
