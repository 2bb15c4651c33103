use std::collections::HashMap;

use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    settings::{entities::SiteSettings, ports::SettingsRepository},
};
use crate::entity::settings::{
    ActiveModel as SettingActiveModel, Column as SettingColumn, Entity as SettingEntity,
};

const KEY_GEMINI_API_KEY: &str = "gemini_api_key";
const KEY_GEMINI_MODEL: &str = "gemini_model";
const KEY_DEFAULT_CITY_ID: &str = "default_city_id";
const KEY_RANDOMIZER_TAGS: &str = "randomizer_tags";

#[derive(Debug, Clone)]
pub struct PostgresSettingsRepository {
    pub db: DatabaseConnection,
}

impl PostgresSettingsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SettingsRepository for PostgresSettingsRepository {
    async fn load(&self) -> Result<SiteSettings, CoreError> {
        let rows: HashMap<String, String> = SettingEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load settings: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(|row| (row.key, row.value))
            .collect();

        let mut settings = SiteSettings::default();

        if let Some(key) = rows.get(KEY_GEMINI_API_KEY) {
            if !key.is_empty() {
                settings.gemini_api_key = Some(key.clone());
            }
        }
        if let Some(model) = rows.get(KEY_GEMINI_MODEL) {
            if !model.is_empty() {
                settings.gemini_model = model.clone();
            }
        }
        if let Some(city_id) = rows.get(KEY_DEFAULT_CITY_ID) {
            settings.default_city_id = Uuid::parse_str(city_id).ok();
        }
        if let Some(tags) = rows.get(KEY_RANDOMIZER_TAGS) {
            settings.randomizer_tags = serde_json::from_str(tags).unwrap_or_default();
        }

        Ok(settings)
    }

    async fn save(&self, settings: SiteSettings) -> Result<SiteSettings, CoreError> {
        let randomizer_tags = serde_json::to_string(&settings.randomizer_tags).map_err(|e| {
            error!("Failed to serialize randomizer tags: {}", e);
            CoreError::InternalServerError
        })?;

        let rows = vec![
            (
                KEY_GEMINI_API_KEY,
                settings.gemini_api_key.clone().unwrap_or_default(),
            ),
            (KEY_GEMINI_MODEL, settings.gemini_model.clone()),
            (
                KEY_DEFAULT_CITY_ID,
                settings
                    .default_city_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ),
            (KEY_RANDOMIZER_TAGS, randomizer_tags),
        ];

        let models = rows.into_iter().map(|(key, value)| SettingActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
        });

        SettingEntity::insert_many(models)
            .on_conflict(
                OnConflict::column(SettingColumn::Key)
                    .update_column(SettingColumn::Value)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save settings: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(settings)
    }
}
