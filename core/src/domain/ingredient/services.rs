use uuid::Uuid;

use crate::domain::{
    author::ports::AnonymousAuthorRepository,
    city::ports::CityRepository,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::Ingredient,
        ports::{IngredientRepository, IngredientService},
    },
    list::ports::ListRepository,
    recipe::ports::RecipeRepository,
    report::ports::ReportRepository,
    revision::ports::RevisionRepository,
    settings::ports::SettingsRepository,
    structuring::ports::LLMClient,
    tag::ports::TagRepository,
    user::{ports::UserRepository, value_objects::Identity},
};

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> IngredientService
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
    async fn get_ingredients(&self, identity: Identity) -> Result<Vec<Ingredient>, CoreError> {
        ensure_policy(Ok(identity.is_moderator()), "insufficient permissions")?;

        self.ingredient_repository.list().await
    }

    async fn delete_ingredient(
        &self,
        identity: Identity,
        ingredient_id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_policy(
            Ok(identity.is_admin()),
            "insufficient permissions to delete ingredients",
        )?;

        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.ingredient_repository.delete(ingredient_id).await
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
    async fn delete_is_admin_only() {
        let service = mocked_service();

        let err = service
            .delete_ingredient(identity_with_role(UserRole::Moderator), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn admin_delete_removes_the_looked_up_row() {
        let ingredient_id = Uuid::new_v4();
        let mut service = mocked_service();

        service
            .ingredient_repository
            .expect_get_by_id()
            .returning(|id| Box::pin(ready(Ok(Some(Ingredient::new(format!("ing-{id}")))))));
        service
            .ingredient_repository
            .expect_delete()
            .times(1)
            .withf(move |id| *id == ingredient_id)
            .returning(|_| Box::pin(ready(Ok(()))));

        service
            .delete_ingredient(identity_with_role(UserRole::Admin), ingredient_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn deleting_an_unknown_ingredient_is_not_found() {
        let mut service = mocked_service();

        service
            .ingredient_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(ready(Ok(None))));

        let err = service
            .delete_ingredient(identity_with_role(UserRole::Admin), Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }
}
