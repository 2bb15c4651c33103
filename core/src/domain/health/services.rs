use crate::domain::{
    author::ports::AnonymousAuthorRepository,
    city::ports::CityRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::{HealthCheckRepository, HealthCheckService},
    ingredient::ports::IngredientRepository,
    list::ports::ListRepository,
    recipe::ports::RecipeRepository,
    report::ports::ReportRepository,
    revision::ports::RevisionRepository,
    settings::ports::SettingsRepository,
    structuring::ports::LLMClient,
    tag::ports::TagRepository,
    user::ports::UserRepository,
};

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> HealthCheckService
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
    async fn readiness(&self) -> Result<(), CoreError> {
        self.health_repository.readiness().await
    }
}
