use crate::application::auth::RequiredIdentity;
use crate::application::http::city::validators::UpdateCityValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::city::entities::City;
use wasfa_core::domain::city::ports::CityService;
use wasfa_core::domain::city::value_objects::UpdateCityInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCityResponse {
    pub data: City,
}

#[utoipa::path(
    put,
    path = "/{city_id}",
    tag = "city",
    summary = "Update city",
    description = "Updates a city's name, description or image. Moderators only.",
    responses(
        (status = 200, body = UpdateCityResponse)
    ),
    params(
        ("city_id" = Uuid, Path, description = "City ID"),
    ),
    request_body = UpdateCityValidator
)]
pub async fn update_city(
    Path(city_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateCityValidator>,
) -> Result<Response<UpdateCityResponse>, ApiError> {
    let city = state
        .service
        .update_city(
            identity,
            UpdateCityInput {
                city_id,
                name: payload.name,
                description: payload.description,
                image: payload.image,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCityResponse { data: city }))
}
