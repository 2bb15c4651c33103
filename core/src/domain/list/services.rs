use uuid::Uuid;

use crate::domain::{
    author::ports::AnonymousAuthorRepository,
    city::ports::CityRepository,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    list::{
        entities::RecipeList,
        ports::{ListPolicy, ListRepository, ListService, ListStatusChange},
        value_objects::{
            BulkListAction, BulkListsInput, CreateListInput, ToggleOutcome, UpdateListInput,
        },
    },
    recipe::ports::{RecipePolicy, RecipeRepository},
    report::ports::ReportRepository,
    revision::ports::RevisionRepository,
    settings::ports::SettingsRepository,
    structuring::ports::LLMClient,
    tag::ports::TagRepository,
    user::{ports::UserRepository, value_objects::Identity},
};

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
    async fn get_visible_list(
        &self,
        identity: Option<&Identity>,
        list_id: Uuid,
    ) -> Result<RecipeList, CoreError> {
        let list = self
            .list_repository
            .get_by_id(list_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if !ListPolicy::can_view(&self.policy, identity, &list) {
            return Err(CoreError::NotFound);
        }

        Ok(list)
    }
}

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> ListService
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
    async fn get_lists(&self, identity: Identity) -> Result<Vec<RecipeList>, CoreError> {
        // Every account owns its default list; create it on first access.
        if self.list_repository.get_default(identity.id()).await?.is_none() {
            let default = RecipeList::new_default(identity.id());
            self.list_repository.create(default).await?;
        }

        self.list_repository.get_by_user(identity.id()).await
    }

    async fn get_list(
        &self,
        identity: Option<Identity>,
        list_id: Uuid,
    ) -> Result<RecipeList, CoreError> {
        self.get_visible_list(identity.as_ref(), list_id).await
    }

    async fn create_list(
        &self,
        identity: Identity,
        input: CreateListInput,
    ) -> Result<RecipeList, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("list name is required".to_string()));
        }

        let list = RecipeList::new(
            identity.id(),
            input.name,
            input.description,
            input.cover_image,
        );
        self.list_repository.create(list).await
    }

    async fn update_list(
        &self,
        identity: Identity,
        input: UpdateListInput,
    ) -> Result<RecipeList, CoreError> {
        let mut list = self.get_visible_list(Some(&identity), input.list_id).await?;

        ensure_policy(
            Ok(self.policy.can_manage(&identity, &list)),
            "insufficient permissions to edit this list",
        )?;

        list.update(
            input.name,
            input.description,
            input.cover_image,
            input.is_public,
        )?;

        self.list_repository.update(list).await
    }

    async fn delete_list(&self, identity: Identity, list_id: Uuid) -> Result<(), CoreError> {
        let list = self.get_visible_list(Some(&identity), list_id).await?;

        ensure_policy(
            Ok(self.policy.can_manage(&identity, &list)),
            "insufficient permissions to delete this list",
        )?;

        if list.is_default {
            return Err(CoreError::Conflict(
                "the default list cannot be deleted".to_string(),
            ));
        }

        self.list_repository.delete(list.id).await
    }

    async fn toggle_recipe(
        &self,
        identity: Identity,
        list_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<ToggleOutcome, CoreError> {
        let list = self.get_visible_list(Some(&identity), list_id).await?;

        ensure_policy(
            Ok(self.policy.can_manage(&identity, &list)),
            "insufficient permissions to edit this list",
        )?;

        // The recipe itself must resolve under the caller's visibility.
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        if !RecipePolicy::can_view(&self.policy, Some(&identity), &recipe) {
            return Err(CoreError::NotFound);
        }

        self.list_repository.toggle_recipe(list.id, recipe_id).await
    }

    async fn request_publish(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> Result<RecipeList, CoreError> {
        let mut list = self.get_visible_list(Some(&identity), list_id).await?;

        ensure_policy(
            Ok(self.policy.can_manage(&identity, &list)),
            "insufficient permissions to publish this list",
        )?;

        let recipe_count = self.list_repository.recipe_count(list.id).await?;
        list.request_publish(recipe_count)?;

        self.list_repository.update(list).await
    }

    async fn approve_list(&self, identity: Identity, list_id: Uuid) -> Result<RecipeList, CoreError> {
        let mut list = self.get_visible_list(Some(&identity), list_id).await?;

        ensure_policy(
            Ok(self.policy.can_moderate(&identity)),
            "insufficient permissions to moderate lists",
        )?;

        list.approve()?;
        self.list_repository.update(list).await
    }

    async fn reject_list(&self, identity: Identity, list_id: Uuid) -> Result<RecipeList, CoreError> {
        let mut list = self.get_visible_list(Some(&identity), list_id).await?;

        ensure_policy(
            Ok(self.policy.can_moderate(&identity)),
            "insufficient permissions to moderate lists",
        )?;

        list.reject();
        self.list_repository.update(list).await
    }

    async fn unpublish_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> Result<RecipeList, CoreError> {
        let mut list = self.get_visible_list(Some(&identity), list_id).await?;

        ensure_policy(
            Ok(self.policy.can_unpublish(&identity, &list)),
            "insufficient permissions to unpublish this list",
        )?;

        list.unpublish();
        self.list_repository.update(list).await
    }

    async fn bulk_lists(&self, identity: Identity, input: BulkListsInput) -> Result<u64, CoreError> {
        if input.ids.is_empty() {
            return Err(CoreError::Validation("no list ids given".to_string()));
        }

        match input.action {
            BulkListAction::Delete => {
                ensure_policy(Ok(identity.is_admin()), "insufficient permissions")?;
                self.list_repository.delete_many(input.ids).await
            }
            BulkListAction::Approve => {
                ensure_policy(
                    Ok(self.policy.can_moderate(&identity)),
                    "insufficient permissions to moderate lists",
                )?;
                self.list_repository
                    .set_status_many(input.ids, ListStatusChange::Approve)
                    .await
            }
            BulkListAction::Reject => {
                ensure_policy(
                    Ok(self.policy.can_moderate(&identity)),
                    "insufficient permissions to moderate lists",
                )?;
                self.list_repository
                    .set_status_many(input.ids, ListStatusChange::Reject)
                    .await
            }
            BulkListAction::Unpublish => {
                ensure_policy(
                    Ok(self.policy.can_moderate(&identity)),
                    "insufficient permissions to moderate lists",
                )?;
                self.list_repository
                    .set_status_many(input.ids, ListStatusChange::Unpublish)
                    .await
            }
        }
    }
}
