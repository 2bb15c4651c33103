use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::city::ports::CityService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCityResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{city_id}",
    tag = "city",
    summary = "Delete city",
    description = "Deletes a city after reassigning its recipes to the default city. Moderators only.",
    responses(
        (status = 200, body = DeleteCityResponse)
    ),
    params(
        ("city_id" = Uuid, Path, description = "City ID"),
    ),
)]
pub async fn delete_city(
    Path(city_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteCityResponse>, ApiError> {
    state
        .service
        .delete_city(identity, city_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCityResponse {
        message: "City deleted successfully".to_string(),
    }))
}
