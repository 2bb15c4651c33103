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
    tag::ports::TagRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::{BulkUserAction, BulkUsersInput, Identity},
    },
};

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> UserService
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
    async fn get_users(&self, identity: Identity) -> Result<Vec<User>, CoreError> {
        // Moderators see the listing; bulk mutations stay admin-only.
        ensure_policy(Ok(identity.is_moderator()), "insufficient permissions")?;

        self.user_repository.list().await
    }

    async fn bulk_users(&self, identity: Identity, input: BulkUsersInput) -> Result<u64, CoreError> {
        ensure_policy(Ok(identity.is_admin()), "insufficient permissions")?;

        if input.ids.is_empty() {
            return Err(CoreError::Validation("no user ids given".to_string()));
        }

        match input.action {
            BulkUserAction::Delete => {
                if input.ids.contains(&identity.id()) {
                    return Err(CoreError::Validation(
                        "cannot delete your own account in a bulk action".to_string(),
                    ));
                }
                self.user_repository.delete_many(input.ids).await
            }
            BulkUserAction::SetRole => {
                let role = input.role.ok_or_else(|| {
                    CoreError::Validation("role is required for set_role".to_string())
                })?;
                self.user_repository.set_role_many(input.ids, role).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        common::services::test_support::{identity_with_role, mocked_service},
        user::entities::UserRole,
    };

    #[tokio::test]
    async fn moderators_can_list_users() {
        let mut service = mocked_service();
        service
            .user_repository
            .expect_list()
            .returning(|| Box::pin(ready(Ok(vec![]))));

        let users = service
            .get_users(identity_with_role(UserRole::Moderator))
            .await
            .unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn regular_accounts_cannot_list_users() {
        let service = mocked_service();

        let err = service
            .get_users(identity_with_role(UserRole::User))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
    }
}
