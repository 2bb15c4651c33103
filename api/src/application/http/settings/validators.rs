use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingsValidator {
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    #[serde(default)]
    pub gemini_model: Option<String>,

    #[serde(default)]
    pub default_city_id: Option<Uuid>,

    #[serde(default)]
    pub randomizer_tags: Option<Vec<Uuid>>,
}
