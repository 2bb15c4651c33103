use super::handlers::bulk_tags::{__path_bulk_tags, bulk_tags};
use super::handlers::get_tags::{__path_get_tags, get_tags};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_tags, bulk_tags))]
pub struct TagApiDoc;

pub fn tag_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/tags", state.args.server.root_path),
            get(get_tags),
        )
        .route(
            &format!("{}/tags/bulk", state.args.server.root_path),
            post(bulk_tags),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
