use super::handlers::bulk_tag::{__path_bulk_tag, bulk_tag};
use super::handlers::structure_content::{__path_structure_content, structure_content};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(structure_content, bulk_tag))]
pub struct StructuringApiDoc;

pub fn structuring_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(
            &format!("{}/structuring/structure", root_path),
            post(structure_content),
        )
        .route(
            &format!("{}/structuring/bulk-tag", root_path),
            post(bulk_tag),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
