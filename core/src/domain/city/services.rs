use uuid::Uuid;

use crate::domain::{
    author::ports::AnonymousAuthorRepository,
    city::{
        entities::City,
        ports::{CityRepository, CityService},
        value_objects::{CreateCityInput, UpdateCityInput},
    },
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    list::ports::ListRepository,
    recipe::ports::RecipeRepository,
    report::ports::ReportRepository,
    revision::ports::RevisionRepository,
    settings::ports::SettingsRepository,
    structuring::ports::LLMClient,
    tag::ports::TagRepository,
    user::{ports::UserRepository, value_objects::Identity},
};

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> CityService
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
    async fn get_cities(&self) -> Result<Vec<City>, CoreError> {
        self.city_repository.list().await
    }

    async fn get_city(&self, city_id: Uuid) -> Result<City, CoreError> {
        self.city_repository
            .get_by_id(city_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_city(
        &self,
        identity: Identity,
        input: CreateCityInput,
    ) -> Result<City, CoreError> {
        ensure_policy(Ok(identity.is_moderator()), "insufficient permissions")?;

        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("city name is required".to_string()));
        }

        let city = City::new(input.name, input.description, input.image);
        self.city_repository.create(city).await
    }

    async fn update_city(
        &self,
        identity: Identity,
        input: UpdateCityInput,
    ) -> Result<City, CoreError> {
        ensure_policy(Ok(identity.is_moderator()), "insufficient permissions")?;

        let mut city = self
            .city_repository
            .get_by_id(input.city_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        city.update(input.name, input.description, input.image);
        self.city_repository.update(city).await
    }

    async fn delete_city(&self, identity: Identity, city_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(Ok(identity.is_admin()), "insufficient permissions")?;

        self.city_repository
            .get_by_id(city_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let settings = self.settings_repository.load().await?;

        if settings.default_city_id == Some(city_id) {
            return Err(CoreError::Conflict(
                "the default city cannot be deleted".to_string(),
            ));
        }

        let dependent = self.city_repository.count_recipes(city_id).await?;
        let target = if dependent > 0 {
            let default_city_id = settings.default_city_id.ok_or_else(|| {
                CoreError::Conflict(
                    "city has recipes and no default city is configured".to_string(),
                )
            })?;
            Some(default_city_id)
        } else {
            None
        };

        self.city_repository
            .reassign_and_delete(city_id, target)
            .await
    }

    async fn delete_cities(&self, identity: Identity, ids: Vec<Uuid>) -> Result<u64, CoreError> {
        if ids.is_empty() {
            return Err(CoreError::Validation("no city ids given".to_string()));
        }

        let mut deleted = 0;
        for city_id in ids {
            self.delete_city(identity.clone(), city_id).await?;
            deleted += 1;
        }

        Ok(deleted)
    }
}
