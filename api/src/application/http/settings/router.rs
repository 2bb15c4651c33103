use super::handlers::get_settings::{__path_get_settings, get_settings};
use super::handlers::update_settings::{__path_update_settings, update_settings};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_settings, update_settings))]
pub struct SettingsApiDoc;

pub fn settings_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{}/settings", root_path), get(get_settings))
        .route(&format!("{}/settings", root_path), put(update_settings))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
