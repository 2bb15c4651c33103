use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::structuring::validators::StructureContentValidator;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use wasfa_core::domain::structuring::ports::StructuringService;
use wasfa_core::domain::structuring::value_objects::{StructureContentInput, StructuredContent};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct StructureContentResponse {
    #[schema(value_type = Object)]
    pub data: StructuredContent,
}

#[utoipa::path(
    post,
    path = "/structure",
    tag = "structuring",
    summary = "Structure recipe text",
    description = "Turns free-form ingredient and step text into grouped submission shapes plus suggested tags from the existing vocabulary.",
    responses(
        (status = 200, body = StructureContentResponse)
    ),
    request_body = StructureContentValidator
)]
pub async fn structure_content(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<StructureContentValidator>,
) -> Result<Response<StructureContentResponse>, ApiError> {
    let content = state
        .service
        .structure_content(
            identity,
            StructureContentInput {
                ingredients_text: payload.ingredients_text,
                steps_text: payload.steps_text,
                locale: payload.locale,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(StructureContentResponse { data: content }))
}
