use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::ingredient::ports::IngredientService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteIngredientResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Delete ingredient",
    description = "Deletes an ingredient after detaching it from every recipe. Admins only.",
    responses(
        (status = 200, body = DeleteIngredientResponse)
    ),
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteIngredientResponse>, ApiError> {
    state
        .service
        .delete_ingredient(identity, ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteIngredientResponse {
        message: "Ingredient deleted successfully".to_string(),
    }))
}
