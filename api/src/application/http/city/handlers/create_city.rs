use crate::application::auth::RequiredIdentity;
use crate::application::http::city::validators::CreateCityValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::city::entities::City;
use wasfa_core::domain::city::ports::CityService;
use wasfa_core::domain::city::value_objects::CreateCityInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCityResponse {
    pub data: City,
}

#[utoipa::path(
    post,
    path = "",
    tag = "city",
    summary = "Create city",
    description = "Creates a new city. Moderators only.",
    responses(
        (status = 201, body = CreateCityResponse)
    ),
    request_body = CreateCityValidator
)]
pub async fn create_city(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCityValidator>,
) -> Result<Response<CreateCityResponse>, ApiError> {
    let city = state
        .service
        .create_city(
            identity,
            CreateCityInput {
                name: payload.name,
                description: payload.description,
                image: payload.image,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCityResponse { data: city }))
}
