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
    settings::ports::SettingsRepository,
    structuring::ports::LLMClient,
    tag::{
        entities::Tag,
        ports::{TagRepository, TagService},
    },
    user::{ports::UserRepository, value_objects::Identity},
};
use uuid::Uuid;

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> TagService
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
    async fn get_tags(&self) -> Result<Vec<Tag>, CoreError> {
        self.tag_repository.list().await
    }

    async fn delete_tags(&self, identity: Identity, ids: Vec<Uuid>) -> Result<u64, CoreError> {
        ensure_policy(Ok(identity.is_admin()), "insufficient permissions")?;

        if ids.is_empty() {
            return Err(CoreError::Validation("no tag ids given".to_string()));
        }

        self.tag_repository.delete_many(ids).await
    }
}
