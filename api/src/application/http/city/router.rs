use super::handlers::bulk_cities::{__path_bulk_cities, bulk_cities};
use super::handlers::create_city::{__path_create_city, create_city};
use super::handlers::delete_city::{__path_delete_city, delete_city};
use super::handlers::get_cities::{__path_get_cities, get_cities};
use super::handlers::get_city::{__path_get_city, get_city};
use super::handlers::update_city::{__path_update_city, update_city};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_cities, get_city, create_city, update_city, delete_city, bulk_cities))]
pub struct CityApiDoc;

pub fn city_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{}/cities", root_path), get(get_cities))
        .route(&format!("{}/cities/bulk", root_path), post(bulk_cities))
        .route(&format!("{}/cities/{{city_id}}", root_path), get(get_city))
        .route(&format!("{}/cities", root_path), post(create_city))
        .route(
            &format!("{}/cities/{{city_id}}", root_path),
            put(update_city),
        )
        .route(
            &format!("{}/cities/{{city_id}}", root_path),
            delete(delete_city),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
