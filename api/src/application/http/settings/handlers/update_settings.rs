use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::settings::validators::UpdateSettingsValidator;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::settings::entities::{SiteSettings, UpdateSettingsInput};
use wasfa_core::domain::settings::ports::SettingsService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateSettingsResponse {
    pub data: SiteSettings,
}

#[utoipa::path(
    put,
    path = "",
    tag = "settings",
    summary = "Update settings",
    description = "Updates the runtime site settings. Only the provided fields change. Admins only.",
    responses(
        (status = 200, body = UpdateSettingsResponse)
    ),
    request_body = UpdateSettingsValidator
)]
pub async fn update_settings(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateSettingsValidator>,
) -> Result<Response<UpdateSettingsResponse>, ApiError> {
    let settings = state
        .service
        .update_settings(
            identity,
            UpdateSettingsInput {
                gemini_api_key: payload.gemini_api_key,
                gemini_model: payload.gemini_model,
                default_city_id: payload.default_city_id,
                randomizer_tags: payload.randomizer_tags,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateSettingsResponse { data: settings }))
}
