use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::list::ports::ListService;
use wasfa_core::domain::list::value_objects::ToggleOutcome;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToggleListRecipeResponse {
    pub outcome: ToggleOutcome,
}

#[utoipa::path(
    post,
    path = "/{list_id}/recipes/{recipe_id}",
    tag = "list",
    summary = "Toggle recipe in list",
    description = "Adds the recipe to the list, or removes it when already present. New members append at the end.",
    responses(
        (status = 200, body = ToggleListRecipeResponse)
    ),
    params(
        ("list_id" = Uuid, Path, description = "List ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn toggle_list_recipe(
    Path((list_id, recipe_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ToggleListRecipeResponse>, ApiError> {
    let outcome = state
        .service
        .toggle_recipe(identity, list_id, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleListRecipeResponse { outcome }))
}
