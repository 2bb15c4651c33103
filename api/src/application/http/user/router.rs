use super::handlers::bulk_users::{__path_bulk_users, bulk_users};
use super::handlers::get_users::{__path_get_users, get_users};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_users, bulk_users))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            get(get_users),
        )
        .route(
            &format!("{}/users/bulk", state.args.server.root_path),
            post(bulk_users),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
