use crate::application::auth::RequiredIdentity;
use crate::application::http::list::validators::UpdateListValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wasfa_core::domain::list::entities::RecipeList;
use wasfa_core::domain::list::ports::ListService;
use wasfa_core::domain::list::value_objects::UpdateListInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateListResponse {
    pub data: RecipeList,
}

#[utoipa::path(
    put,
    path = "/{list_id}",
    tag = "list",
    summary = "Update list",
    description = "Updates a list's name, description, cover image or visibility. Owner and moderators only.",
    responses(
        (status = 200, body = UpdateListResponse)
    ),
    params(
        ("list_id" = Uuid, Path, description = "List ID"),
    ),
    request_body = UpdateListValidator
)]
pub async fn update_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateListValidator>,
) -> Result<Response<UpdateListResponse>, ApiError> {
    let list = state
        .service
        .update_list(
            identity,
            UpdateListInput {
                list_id,
                name: payload.name,
                description: payload.description,
                cover_image: payload.cover_image,
                is_public: payload.is_public,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateListResponse { data: list }))
}
