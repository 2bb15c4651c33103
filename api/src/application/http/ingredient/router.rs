use super::handlers::delete_ingredient::{__path_delete_ingredient, delete_ingredient};
use super::handlers::get_ingredients::{__path_get_ingredients, get_ingredients};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_ingredients, delete_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(
            &format!("{}/ingredients", root_path),
            get(get_ingredients),
        )
        .route(
            &format!("{}/ingredients/{{ingredient_id}}", root_path),
            delete(delete_ingredient),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
