use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::settings::entities::SiteSettings;
use wasfa_core::domain::settings::ports::SettingsService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSettingsResponse {
    pub data: SiteSettings,
}

#[utoipa::path(
    get,
    path = "",
    tag = "settings",
    summary = "Get settings",
    description = "Retrieves the runtime site settings. Admins only.",
    responses(
        (status = 200, body = GetSettingsResponse)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetSettingsResponse>, ApiError> {
    let settings = state
        .service
        .get_settings(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSettingsResponse { data: settings }))
}
