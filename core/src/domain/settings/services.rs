use crate::domain::{
    author::ports::AnonymousAuthorRepository,
    city::ports::CityRepository,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    list::ports::ListRepository,
    recipe::ports::RecipeRepository,
    report::ports::ReportRepository,
    revision::ports::RevisionRepository,
    settings::{
        entities::{SiteSettings, UpdateSettingsInput},
        ports::{SettingsRepository, SettingsService},
    },
    structuring::ports::LLMClient,
    tag::ports::TagRepository,
    user::{ports::UserRepository, value_objects::Identity},
};

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> SettingsService
    for Service<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC>
where
    U: UserRepository,
    RE: RecipeRepository,
    IN: IngredientRepository,
    TA: TagRepository,
    CI: CityRepository,
    AU: AnonymousAuthorRepository,
    RV: RevisionRepository,
    LI: ListRepository,
    RP: ReportRepository,
    SE: SettingsRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn get_settings(&self, identity: Identity) -> Result<SiteSettings, CoreError> {
        ensure_policy(Ok(identity.is_admin()), "insufficient permissions")?;

        self.settings_repository.load().await
    }

    async fn update_settings(
        &self,
        identity: Identity,
        input: UpdateSettingsInput,
    ) -> Result<SiteSettings, CoreError> {
        ensure_policy(Ok(identity.is_admin()), "insufficient permissions")?;

        let mut settings = self.settings_repository.load().await?;

        if let Some(api_key) = input.gemini_api_key {
            settings.gemini_api_key = if api_key.is_empty() {
                None
            } else {
                Some(api_key)
            };
        }
        if let Some(model) = input.gemini_model {
            if model.trim().is_empty() {
                return Err(CoreError::Validation(
                    "gemini_model cannot be empty".to_string(),
                ));
            }
            settings.gemini_model = model;
        }
        if let Some(city_id) = input.default_city_id {
            self.city_repository
                .get_by_id(city_id)
                .await?
                .ok_or_else(|| {
                    CoreError::Validation("default_city_id does not exist".to_string())
                })?;
            settings.default_city_id = Some(city_id);
        }
        if let Some(tags) = input.randomizer_tags {
            settings.randomizer_tags = tags;
        }

        self.settings_repository.save(settings).await
    }
}
