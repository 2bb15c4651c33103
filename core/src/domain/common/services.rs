use crate::domain::{
    author::ports::AnonymousAuthorRepository, city::ports::CityRepository,
    common::policies::WasfaPolicy, health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository, list::ports::ListRepository,
    recipe::ports::RecipeRepository, report::ports::ReportRepository,
    revision::ports::RevisionRepository, settings::ports::SettingsRepository,
    structuring::ports::LLMClient, tag::ports::TagRepository, user::ports::UserRepository,
};

/// Aggregate service over every repository port. Area service traits
/// (`RecipeService`, `ListService`, …) are implemented on this type in
/// their own `services.rs` modules.
#[derive(Debug, Clone)]
pub struct Service<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC>
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
    pub user_repository: U,
    pub recipe_repository: RE,
    pub ingredient_repository: IN,
    pub tag_repository: TA,
    pub city_repository: CI,
    pub author_repository: AU,
    pub revision_repository: RV,
    pub list_repository: LI,
    pub report_repository: RP,
    pub settings_repository: SE,
    pub llm_client: LLM,
    pub health_repository: HC,
    pub policy: WasfaPolicy,
}

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC>
    Service<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        recipe_repository: RE,
        ingredient_repository: IN,
        tag_repository: TA,
        city_repository: CI,
        author_repository: AU,
        revision_repository: RV,
        list_repository: LI,
        report_repository: RP,
        settings_repository: SE,
        llm_client: LLM,
        health_repository: HC,
    ) -> Self {
        Self {
            user_repository,
            recipe_repository,
            ingredient_repository,
            tag_repository,
            city_repository,
            author_repository,
            revision_repository,
            list_repository,
            report_repository,
            settings_repository,
            llm_client,
            health_repository,
            policy: WasfaPolicy::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;
    use uuid::Uuid;

    use super::Service;
    use crate::domain::{
        author::ports::MockAnonymousAuthorRepository,
        city::ports::MockCityRepository,
        health::ports::MockHealthCheckRepository,
        ingredient::ports::MockIngredientRepository,
        list::ports::MockListRepository,
        recipe::ports::MockRecipeRepository,
        report::ports::MockReportRepository,
        revision::ports::MockRevisionRepository,
        settings::ports::MockSettingsRepository,
        structuring::ports::MockLLMClient,
        tag::ports::MockTagRepository,
        user::{
            entities::{User, UserRole},
            ports::MockUserRepository,
            value_objects::Identity,
        },
    };

    pub(crate) type MockedService = Service<
        MockUserRepository,
        MockRecipeRepository,
        MockIngredientRepository,
        MockTagRepository,
        MockCityRepository,
        MockAnonymousAuthorRepository,
        MockRevisionRepository,
        MockListRepository,
        MockReportRepository,
        MockSettingsRepository,
        MockLLMClient,
        MockHealthCheckRepository,
    >;

    /// A service over fresh mocks with no expectations set.
    pub(crate) fn mocked_service() -> MockedService {
        Service::new(
            MockUserRepository::new(),
            MockRecipeRepository::new(),
            MockIngredientRepository::new(),
            MockTagRepository::new(),
            MockCityRepository::new(),
            MockAnonymousAuthorRepository::new(),
            MockRevisionRepository::new(),
            MockListRepository::new(),
            MockReportRepository::new(),
            MockSettingsRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
        )
    }

    pub(crate) fn identity_with_role(role: UserRole) -> Identity {
        Identity::User(User {
            id: Uuid::new_v4(),
            name: "sam".to_string(),
            email: "sam@example.com".to_string(),
            avatar: None,
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }
}
