use uuid::Uuid;

use crate::domain::{
    author::ports::AnonymousAuthorRepository,
    city::ports::CityRepository,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    list::ports::ListRepository,
    recipe::{
        entities::{Difficulty, Recipe, RecipeDetail, RecipeOwner, RecipeStatus, RecipeUser},
        ports::{RecipePolicy, RecipeRepository, RecipeService, StatusChange},
        value_objects::{
            collapse_ingredient_rows, BulkRecipeAction, BulkRecipesInput, CreateRecipeInput,
            GetRecipesFilter, IngredientGroup, RecipeIngredientRow, UpdateRecipeInput,
        },
    },
    report::ports::ReportRepository,
    revision::{
        entities::{RecipeRevision, SUMMARY_INITIAL, SUMMARY_UPDATE},
        ports::RevisionRepository,
    },
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
    /// Slugs are unique; a name collision gets a numeric suffix instead of
    /// bubbling a database constraint error back to the submitter.
    async fn unique_slug(&self, name: &str, exclude: Option<Uuid>) -> Result<String, CoreError> {
        let base = crate::domain::common::slugify(name);
        let mut candidate = base.clone();
        let mut n = 2;
        while self
            .recipe_repository
            .slug_exists(candidate.clone(), exclude)
            .await?
        {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        Ok(candidate)
    }

    async fn ensure_city_exists(&self, city_id: Uuid) -> Result<(), CoreError> {
        self.city_repository
            .get_by_id(city_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| CoreError::Validation("city does not exist".to_string()))
    }

    /// Resolves every named item to an ingredient row and collapses the
    /// result to one row per ingredient id.
    async fn resolve_ingredient_rows(
        &self,
        groups: Vec<IngredientGroup>,
    ) -> Result<Vec<RecipeIngredientRow>, CoreError> {
        let mut rows = Vec::new();
        let mut sort_order = 0;
        for group in groups {
            for item in group.items {
                let ingredient = self.ingredient_repository.find_or_create(item.name).await?;
                rows.push(RecipeIngredientRow {
                    ingredient_id: ingredient.id,
                    amount: item.amount,
                    unit: item.unit,
                    descriptor: item.descriptor,
                    group: group.name.clone(),
                    sort_order,
                });
                sort_order += 1;
            }
        }
        Ok(collapse_ingredient_rows(rows))
    }

    async fn resolve_tag_ids(&self, names: Vec<String>) -> Result<Vec<Uuid>, CoreError> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim().to_string();
            if name.is_empty() {
                continue;
            }
            let tag = self.tag_repository.find_or_create(name).await?;
            if !ids.contains(&tag.id) {
                ids.push(tag.id);
            }
        }
        Ok(ids)
    }

    /// Assembles the public "full recipe" representation, which is also the
    /// revision snapshot shape.
    pub(crate) async fn load_recipe_detail(
        &self,
        recipe: &Recipe,
    ) -> Result<RecipeDetail, CoreError> {
        let (city, city_slug) = match recipe.city_id {
            Some(city_id) => match self.city_repository.get_by_id(city_id).await? {
                Some(city) => (Some(city.name), Some(city.slug)),
                None => (None, None),
            },
            None => (None, None),
        };

        let tags = self.tag_repository.get_by_recipe(recipe.id).await?;
        let ingredients = self.recipe_repository.get_ingredients(recipe.id).await?;

        let (author_name, user) = match recipe.owner {
            RecipeOwner::User(user_id) => match self.user_repository.get_by_id(user_id).await? {
                Some(user) => (
                    user.name.clone(),
                    Some(RecipeUser {
                        id: user.id,
                        name: user.name,
                        avatar: user.avatar,
                    }),
                ),
                None => (String::new(), None),
            },
            RecipeOwner::Anonymous(author_id) => {
                let author = self.author_repository.get_by_id(author_id).await?;
                (author.map(|a| a.name).unwrap_or_default(), None)
            }
        };

        Ok(RecipeDetail {
            id: recipe.id,
            name: recipe.name.clone(),
            slug: recipe.slug.clone(),
            image_url: recipe.image.clone(),
            city,
            city_slug,
            city_id: recipe.city_id,
            time_needed: recipe.time_needed.clone(),
            difficulty: recipe.difficulty,
            author_name,
            tags,
            servings: recipe.servings.clone(),
            ingredients,
            steps: recipe.steps.clone(),
            is_anonymous: recipe.owner.is_anonymous(),
            user,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
            status: recipe.status,
        })
    }

    async fn record_revision(
        &self,
        recipe_id: Uuid,
        actor: Uuid,
        content: RecipeDetail,
        summary: &str,
    ) -> Result<(), CoreError> {
        let revision = RecipeRevision::new(recipe_id, Some(actor), content, summary.to_string());
        self.revision_repository.append(revision).await?;
        Ok(())
    }

    /// Loads through the visibility rule: invisible recipes are
    /// indistinguishable from absent ones.
    async fn get_visible_recipe(
        &self,
        identity: Option<&Identity>,
        recipe_id: Uuid,
    ) -> Result<Recipe, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if !self.policy.can_view(identity, &recipe) {
            return Err(CoreError::NotFound);
        }

        Ok(recipe)
    }
}

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> RecipeService
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
    async fn get_recipes(
        &self,
        identity: Option<Identity>,
        mut filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        let moderator = identity.as_ref().is_some_and(|i| i.is_moderator());
        let own_listing = match (&identity, filter.owner_user_id) {
            (Some(identity), Some(owner)) => identity.id() == owner,
            _ => false,
        };

        // The public catalog only ever shows approved content.
        if !moderator && !own_listing {
            filter.status = Some(RecipeStatus::Approved);
        }

        self.recipe_repository.list(filter).await
    }

    async fn get_recipe(
        &self,
        identity: Option<Identity>,
        recipe_id: Uuid,
    ) -> Result<RecipeDetail, CoreError> {
        let recipe = self.get_visible_recipe(identity.as_ref(), recipe_id).await?;
        self.load_recipe_detail(&recipe).await
    }

    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<RecipeDetail, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("recipe name is required".to_string()));
        }
        let difficulty = Difficulty::parse(&input.difficulty)?;

        if let Some(city_id) = input.city_id {
            self.ensure_city_exists(city_id).await?;
        }

        let owner = match input.anonymous_author {
            Some(author_input) => {
                ensure_policy(
                    Ok(identity.is_moderator()),
                    "insufficient permissions to credit an anonymous author",
                )?;
                let author = self
                    .author_repository
                    .find_or_create(author_input.name, author_input.bio)
                    .await?;
                RecipeOwner::Anonymous(author.id)
            }
            None => RecipeOwner::User(identity.id()),
        };

        let time_needed = match input.time_needed {
            Some(sections) => sections.canonicalize()?,
            None => Default::default(),
        };
        let steps = input.steps.canonicalize()?;
        let ingredient_groups = input.ingredients.canonicalize()?;

        let mut recipe = Recipe::new(
            input.name,
            input.image,
            input.servings,
            time_needed,
            difficulty,
            steps,
            owner,
            input.city_id,
            identity.id(),
            identity.is_moderator(),
        );
        recipe.slug = self.unique_slug(&recipe.name, None).await?;
        let recipe = self.recipe_repository.create(recipe).await?;

        let rows = self.resolve_ingredient_rows(ingredient_groups).await?;
        self.recipe_repository
            .sync_ingredients(recipe.id, rows)
            .await?;

        let tag_ids = self.resolve_tag_ids(input.tags).await?;
        self.recipe_repository.sync_tags(recipe.id, tag_ids).await?;

        let detail = self.load_recipe_detail(&recipe).await?;
        self.record_revision(recipe.id, identity.id(), detail.clone(), SUMMARY_INITIAL)
            .await?;

        Ok(detail)
    }

    async fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> Result<RecipeDetail, CoreError> {
        let mut recipe = self
            .get_visible_recipe(Some(&identity), input.recipe_id)
            .await?;

        ensure_policy(
            Ok(self.policy.can_edit(&identity, &recipe)),
            "insufficient permissions to edit this recipe",
        )?;

        if let Some(name) = input.name {
            if name.trim().is_empty() {
                return Err(CoreError::Validation("recipe name is required".to_string()));
            }
            recipe.slug = self.unique_slug(&name, Some(recipe.id)).await?;
            recipe.name = name;
        }
        if let Some(difficulty) = input.difficulty {
            recipe.difficulty = Difficulty::parse(&difficulty)?;
        }
        if let Some(city_id) = input.city_id {
            self.ensure_city_exists(city_id).await?;
            recipe.city_id = Some(city_id);
        }
        if let Some(image) = input.image {
            recipe.image = Some(image);
        }
        if let Some(servings) = input.servings {
            recipe.servings = Some(servings);
        }
        if let Some(time_needed) = input.time_needed {
            recipe.time_needed = time_needed.canonicalize()?;
        }
        if let Some(steps) = input.steps {
            recipe.steps = steps.canonicalize()?;
        }

        // Any edit by the non-privileged owner of an approved recipe sends
        // it back to review, no matter which fields changed.
        recipe.apply_edit(identity.is_moderator());

        let recipe = self.recipe_repository.update(recipe).await?;

        if let Some(ingredients) = input.ingredients {
            let rows = self
                .resolve_ingredient_rows(ingredients.canonicalize()?)
                .await?;
            self.recipe_repository
                .sync_ingredients(recipe.id, rows)
                .await?;
        }
        if let Some(tags) = input.tags {
            let tag_ids = self.resolve_tag_ids(tags).await?;
            self.recipe_repository.sync_tags(recipe.id, tag_ids).await?;
        }

        let detail = self.load_recipe_detail(&recipe).await?;
        self.record_revision(recipe.id, identity.id(), detail.clone(), SUMMARY_UPDATE)
            .await?;

        Ok(detail)
    }

    async fn delete_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<(), CoreError> {
        let recipe = self.get_visible_recipe(Some(&identity), recipe_id).await?;

        ensure_policy(
            Ok(self.policy.can_delete(&identity)),
            "insufficient permissions to delete recipes",
        )?;

        // Pivot rows cascade with the recipe; revisions are kept until the
        // history is cleared explicitly.
        self.recipe_repository.delete(recipe.id).await
    }

    async fn approve_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        let mut recipe = self.get_visible_recipe(Some(&identity), recipe_id).await?;

        ensure_policy(
            Ok(self.policy.can_approve(&identity)),
            "insufficient permissions to moderate recipes",
        )?;

        recipe.approve(identity.id())?;
        self.recipe_repository.update(recipe).await
    }

    async fn reject_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        reason: String,
    ) -> Result<Recipe, CoreError> {
        let mut recipe = self.get_visible_recipe(Some(&identity), recipe_id).await?;

        ensure_policy(
            Ok(self.policy.can_approve(&identity)),
            "insufficient permissions to moderate recipes",
        )?;

        recipe.reject(reason)?;
        self.recipe_repository.update(recipe).await
    }

    async fn unpublish_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<Recipe, CoreError> {
        let mut recipe = self.get_visible_recipe(Some(&identity), recipe_id).await?;

        ensure_policy(
            Ok(self.policy.can_approve(&identity)),
            "insufficient permissions to moderate recipes",
        )?;

        recipe.unpublish();
        self.recipe_repository.update(recipe).await
    }

    async fn bulk_recipes(
        &self,
        identity: Identity,
        input: BulkRecipesInput,
    ) -> Result<u64, CoreError> {
        if input.ids.is_empty() {
            return Err(CoreError::Validation("no recipe ids given".to_string()));
        }

        match input.action {
            BulkRecipeAction::Delete => {
                ensure_policy(
                    Ok(self.policy.can_delete(&identity)),
                    "insufficient permissions to delete recipes",
                )?;
                self.recipe_repository.delete_many(input.ids).await
            }
            BulkRecipeAction::Approve => {
                ensure_policy(
                    Ok(self.policy.can_approve(&identity)),
                    "insufficient permissions to moderate recipes",
                )?;
                self.recipe_repository
                    .set_status_many(
                        input.ids,
                        StatusChange::Approve {
                            approved_by: identity.id(),
                        },
                    )
                    .await
            }
            BulkRecipeAction::Reject => {
                ensure_policy(
                    Ok(self.policy.can_approve(&identity)),
                    "insufficient permissions to moderate recipes",
                )?;
                let reason = input
                    .reason
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or_else(|| {
                        CoreError::Validation("a rejection reason is required".to_string())
                    })?;
                if reason.chars().count()
                    > crate::domain::recipe::entities::recipe::MAX_REJECTION_REASON_LEN
                {
                    return Err(CoreError::Validation(
                        "rejection reason must be at most 500 characters".to_string(),
                    ));
                }
                self.recipe_repository
                    .set_status_many(
                        input.ids,
                        StatusChange::Reject {
                            reason: reason.to_string(),
                        },
                    )
                    .await
            }
            BulkRecipeAction::Unpublish => {
                ensure_policy(
                    Ok(self.policy.can_approve(&identity)),
                    "insufficient permissions to moderate recipes",
                )?;
                self.recipe_repository
                    .set_status_many(input.ids, StatusChange::Unpublish)
                    .await
            }
        }
    }

    async fn get_revisions(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeRevision>, CoreError> {
        let recipe = self.get_visible_recipe(Some(&identity), recipe_id).await?;

        ensure_policy(
            Ok(self.policy.can_edit(&identity, &recipe)),
            "insufficient permissions to view revision history",
        )?;

        self.revision_repository.list_by_recipe(recipe.id).await
    }

    async fn clear_revisions(&self, identity: Identity, recipe_id: Uuid) -> Result<u64, CoreError> {
        let recipe = self.get_visible_recipe(Some(&identity), recipe_id).await?;

        ensure_policy(
            Ok(self.policy.can_clear_revisions(&identity, &recipe)),
            "insufficient permissions to clear revision history",
        )?;

        self.revision_repository.clear_by_recipe(recipe.id).await
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        common::services::test_support::{MockedService, identity_with_role, mocked_service},
        recipe::value_objects::{IngredientsInput, SectionsInput},
        user::entities::{User, UserRole},
    };

    fn create_input(name: &str) -> CreateRecipeInput {
        CreateRecipeInput {
            name: name.to_string(),
            image: None,
            servings: None,
            time_needed: None,
            difficulty: "سهلة".to_string(),
            steps: SectionsInput::Flat(vec!["اخلطي المكونات".to_string()]),
            ingredients: IngredientsInput::Flat(vec![]),
            tags: vec![],
            city_id: None,
            anonymous_author: None,
        }
    }

    fn expect_detail_lookups(service: &mut MockedService, user: User) {
        service
            .tag_repository
            .expect_get_by_recipe()
            .returning(|_| Box::pin(ready(Ok(vec![]))));
        service
            .recipe_repository
            .expect_get_ingredients()
            .returning(|_| Box::pin(ready(Ok(vec![]))));
        service
            .user_repository
            .expect_get_by_id()
            .returning(move |_| {
                let user = user.clone();
                Box::pin(ready(Ok(Some(user))))
            });
    }

    #[tokio::test]
    async fn create_suffixes_a_taken_slug_and_records_one_revision() {
        let identity = identity_with_role(UserRole::User);
        let Identity::User(user) = identity.clone();
        let mut service = mocked_service();

        // First candidate is taken, the suffixed one is free.
        service
            .recipe_repository
            .expect_slug_exists()
            .times(2)
            .returning(|slug, exclude| {
                assert!(exclude.is_none());
                Box::pin(ready(Ok(slug == "chicken-shawarma")))
            });
        service
            .recipe_repository
            .expect_create()
            .withf(|recipe| recipe.slug == "chicken-shawarma-2")
            .returning(|recipe| Box::pin(ready(Ok(recipe))));
        service
            .recipe_repository
            .expect_sync_ingredients()
            .returning(|_, _| Box::pin(ready(Ok(()))));
        service
            .recipe_repository
            .expect_sync_tags()
            .returning(|_, _| Box::pin(ready(Ok(()))));
        service
            .revision_repository
            .expect_append()
            .times(1)
            .withf(|revision| revision.change_summary == SUMMARY_INITIAL)
            .returning(|revision| Box::pin(ready(Ok(revision))));
        expect_detail_lookups(&mut service, user);

        let detail = service
            .create_recipe(identity, create_input("Chicken Shawarma"))
            .await
            .unwrap();
        assert_eq!(detail.slug, "chicken-shawarma-2");
    }

    #[tokio::test]
    async fn update_records_exactly_one_revision() {
        let identity = identity_with_role(UserRole::User);
        let Identity::User(user) = identity.clone();
        let recipe = Recipe::new(
            "فتوش".to_string(),
            None,
            None,
            Default::default(),
            Difficulty::Easy,
            Default::default(),
            RecipeOwner::User(user.id),
            None,
            user.id,
            false,
        );
        let mut service = mocked_service();

        let fetched = recipe.clone();
        service
            .recipe_repository
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = fetched.clone();
                Box::pin(ready(Ok(Some(recipe))))
            });
        service
            .recipe_repository
            .expect_update()
            .returning(|recipe| Box::pin(ready(Ok(recipe))));
        service
            .revision_repository
            .expect_append()
            .times(1)
            .withf(|revision| revision.change_summary == SUMMARY_UPDATE)
            .returning(|revision| Box::pin(ready(Ok(revision))));
        expect_detail_lookups(&mut service, user);

        let input = UpdateRecipeInput {
            recipe_id: recipe.id,
            name: None,
            image: None,
            servings: Some("6".to_string()),
            time_needed: None,
            difficulty: None,
            steps: None,
            ingredients: None,
            tags: None,
            city_id: None,
        };
        service.update_recipe(identity, input).await.unwrap();
    }

    #[tokio::test]
    async fn bulk_reject_forwards_the_trimmed_reason_per_id() {
        let identity = identity_with_role(UserRole::Moderator);
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let mut service = mocked_service();

        let expected_ids = ids.clone();
        service
            .recipe_repository
            .expect_set_status_many()
            .times(1)
            .withf(move |ids, change| {
                *ids == expected_ids
                    && *change
                        == StatusChange::Reject {
                            reason: "spam".to_string(),
                        }
            })
            .returning(|ids, _| Box::pin(ready(Ok(ids.len() as u64))));

        let affected = service
            .bulk_recipes(
                identity,
                BulkRecipesInput {
                    ids,
                    action: BulkRecipeAction::Reject,
                    reason: Some("  spam  ".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(affected, 2);
    }
}
