use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::city::entities::City;
use wasfa_core::domain::city::ports::CityService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCityResponse {
    pub data: City,
}

#[utoipa::path(
    get,
    path = "/{city_id}",
    tag = "city",
    summary = "Get city",
    description = "Retrieves a single city.",
    responses(
        (status = 200, body = GetCityResponse)
    ),
    params(
        ("city_id" = Uuid, Path, description = "City ID"),
    ),
)]
pub async fn get_city(
    Path(city_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCityResponse>, ApiError> {
    let city = state
        .service
        .get_city(city_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCityResponse { data: city }))
}
