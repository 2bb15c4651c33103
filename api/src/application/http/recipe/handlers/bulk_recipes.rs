use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::BulkRecipesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wasfa_core::domain::recipe::ports::RecipeService;
use wasfa_core::domain::recipe::value_objects::BulkRecipesInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BulkRecipesResponse {
    pub affected: u64,
}

#[utoipa::path(
    post,
    path = "/bulk",
    tag = "recipe",
    summary = "Bulk recipe action",
    description = "Approves, rejects, unpublishes or deletes recipes in one batch. Deletion is admin-only.",
    responses(
        (status = 200, body = BulkRecipesResponse)
    ),
    request_body = BulkRecipesValidator
)]
pub async fn bulk_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BulkRecipesValidator>,
) -> Result<Response<BulkRecipesResponse>, ApiError> {
    let affected = state
        .service
        .bulk_recipes(
            identity,
            BulkRecipesInput {
                ids: payload.ids,
                action: payload.action,
                reason: payload.reason,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkRecipesResponse { affected }))
}
