use super::handlers::approve_list::{__path_approve_list, approve_list};
use super::handlers::bulk_lists::{__path_bulk_lists, bulk_lists};
use super::handlers::create_list::{__path_create_list, create_list};
use super::handlers::delete_list::{__path_delete_list, delete_list};
use super::handlers::get_list::{__path_get_list, get_list};
use super::handlers::get_lists::{__path_get_lists, get_lists};
use super::handlers::reject_list::{__path_reject_list, reject_list};
use super::handlers::request_publish::{__path_request_publish, request_publish};
use super::handlers::toggle_list_recipe::{__path_toggle_list_recipe, toggle_list_recipe};
use super::handlers::unpublish_list::{__path_unpublish_list, unpublish_list};
use super::handlers::update_list::{__path_update_list, update_list};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_lists,
    get_list,
    create_list,
    update_list,
    delete_list,
    toggle_list_recipe,
    request_publish,
    approve_list,
    reject_list,
    unpublish_list,
    bulk_lists
))]
pub struct ListApiDoc;

pub fn list_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{}/lists", root_path), get(get_lists))
        .route(&format!("{}/lists", root_path), post(create_list))
        .route(&format!("{}/lists/bulk", root_path), post(bulk_lists))
        .route(&format!("{}/lists/{{list_id}}", root_path), get(get_list))
        .route(
            &format!("{}/lists/{{list_id}}", root_path),
            put(update_list),
        )
        .route(
            &format!("{}/lists/{{list_id}}", root_path),
            delete(delete_list),
        )
        .route(
            &format!("{}/lists/{{list_id}}/recipes/{{recipe_id}}", root_path),
            post(toggle_list_recipe),
        )
        .route(
            &format!("{}/lists/{{list_id}}/request-publish", root_path),
            post(request_publish),
        )
        .route(
            &format!("{}/lists/{{list_id}}/approve", root_path),
            post(approve_list),
        )
        .route(
            &format!("{}/lists/{{list_id}}/reject", root_path),
            post(reject_list),
        )
        .route(
            &format!("{}/lists/{{list_id}}/unpublish", root_path),
            post(unpublish_list),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
