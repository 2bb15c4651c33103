use crate::application::auth::RequiredIdentity;
use crate::application::http::list::validators::CreateListValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::list::entities::RecipeList;
use wasfa_core::domain::list::ports::ListService;
use wasfa_core::domain::list::value_objects::CreateListInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateListResponse {
    pub data: RecipeList,
}

#[utoipa::path(
    post,
    path = "",
    tag = "list",
    summary = "Create list",
    description = "Creates a private recipe list for the caller.",
    responses(
        (status = 201, body = CreateListResponse)
    ),
    request_body = CreateListValidator
)]
pub async fn create_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateListValidator>,
) -> Result<Response<CreateListResponse>, ApiError> {
    let list = state
        .service
        .create_list(
            identity,
            CreateListInput {
                name: payload.name,
                description: payload.description,
                cover_image: payload.cover_image,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateListResponse { data: list }))
}
