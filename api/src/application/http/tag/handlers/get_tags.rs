use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::tag::entities::Tag;
use wasfa_core::domain::tag::ports::TagService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTagsResponse {
    pub data: Vec<Tag>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "tag",
    summary = "Get tags",
    description = "Retrieves the full tag vocabulary, alphabetically sorted.",
    responses(
        (status = 200, body = GetTagsResponse)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<Response<GetTagsResponse>, ApiError> {
    let tags = state.service.get_tags().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetTagsResponse { data: tags }))
}
