use super::handlers::approve_recipe::{__path_approve_recipe, approve_recipe};
use super::handlers::bulk_recipes::{__path_bulk_recipes, bulk_recipes};
use super::handlers::clear_revisions::{__path_clear_revisions, clear_revisions};
use super::handlers::create_recipe::{__path_create_recipe, create_recipe};
use super::handlers::delete_recipe::{__path_delete_recipe, delete_recipe};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::get_recipes::{__path_get_recipes, get_recipes};
use super::handlers::get_revisions::{__path_get_revisions, get_revisions};
use super::handlers::reject_recipe::{__path_reject_recipe, reject_recipe};
use super::handlers::unpublish_recipe::{__path_unpublish_recipe, unpublish_recipe};
use super::handlers::update_recipe::{__path_update_recipe, update_recipe};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_recipes,
    get_recipe,
    create_recipe,
    update_recipe,
    delete_recipe,
    approve_recipe,
    reject_recipe,
    unpublish_recipe,
    bulk_recipes,
    get_revisions,
    clear_revisions
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{}/recipes", root_path), get(get_recipes))
        .route(&format!("{}/recipes", root_path), post(create_recipe))
        .route(&format!("{}/recipes/bulk", root_path), post(bulk_recipes))
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            put(update_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            delete(delete_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/approve", root_path),
            post(approve_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/reject", root_path),
            post(reject_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/unpublish", root_path),
            post(unpublish_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/revisions", root_path),
            get(get_revisions),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/revisions", root_path),
            delete(clear_revisions),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
