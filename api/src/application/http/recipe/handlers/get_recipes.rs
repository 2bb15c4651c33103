use crate::application::auth::OptionalIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use wasfa_core::domain::recipe::entities::{Recipe, RecipeStatus};
use wasfa_core::domain::recipe::ports::RecipeService;
use wasfa_core::domain::recipe::value_objects::GetRecipesFilter;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetRecipesQuery {
    pub status: Option<RecipeStatus>,
    pub city_id: Option<Uuid>,
    pub tag_id: Option<Uuid>,
    pub search: Option<String>,
    pub owner_user_id: Option<Uuid>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Get recipes",
    description = "Lists recipes, newest first. Anonymous callers and regular users only see approved content unless listing their own.",
    params(GetRecipesQuery),
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
)]
pub async fn get_recipes(
    Query(query): Query<GetRecipesQuery>,
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_recipes(
            identity,
            GetRecipesFilter {
                status: query.status,
                city_id: query.city_id,
                tag_id: query.tag_id,
                search: query.search,
                owner_user_id: query.owner_user_id,
                limit: query.limit,
                offset: query.offset,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}
