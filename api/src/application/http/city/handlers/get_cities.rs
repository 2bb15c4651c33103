use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::city::entities::City;
use wasfa_core::domain::city::ports::CityService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCitiesResponse {
    pub data: Vec<City>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "city",
    summary = "Get cities",
    description = "Retrieves all cities, alphabetically sorted.",
    responses(
        (status = 200, body = GetCitiesResponse)
    ),
)]
pub async fn get_cities(
    State(state): State<AppState>,
) -> Result<Response<GetCitiesResponse>, ApiError> {
    let cities = state.service.get_cities().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetCitiesResponse { data: cities }))
}
