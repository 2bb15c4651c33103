use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Typed view over the key-value settings rows. Loaded fresh per operation
/// so operators can rotate the API key or move the default city without a
/// redeploy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteSettings {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub default_city_id: Option<Uuid>,
    /// Tag ids the public recipe randomizer draws from.
    pub randomizer_tags: Vec<Uuid>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            default_city_id: None,
            randomizer_tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsInput {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub default_city_id: Option<Uuid>,
    pub randomizer_tags: Option<Vec<Uuid>>,
}
