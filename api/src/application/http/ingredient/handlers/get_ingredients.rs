use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::ingredient::entities::Ingredient;
use wasfa_core::domain::ingredient::ports::IngredientService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "Get ingredients",
    description = "Retrieves the shared ingredient reference rows. Moderators only.",
    responses(
        (status = 200, body = GetIngredientsResponse)
    ),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .get_ingredients(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientsResponse { data: ingredients }))
}
