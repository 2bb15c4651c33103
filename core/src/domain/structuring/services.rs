use std::time::Duration;

use uuid::Uuid;

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
    structuring::{
        ports::{LLMClient, StructuringService},
        prompts,
        value_objects::{
            BulkTagError, BulkTagOutcome, LlmCredentials, StructureContentInput, StructuredContent,
            TagReply, strip_code_fences,
        },
    },
    tag::{entities::Tag, ports::TagRepository},
    user::{ports::UserRepository, value_objects::Identity},
};

/// Fixed pause between bulk-tag items, a blunt guard against the upstream
/// rate limit.
const BULK_TAG_DELAY: Duration = Duration::from_millis(1500);

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
    async fn llm_credentials(&self) -> Result<LlmCredentials, CoreError> {
        let settings = self.settings_repository.load().await?;
        LlmCredentials::from_settings(&settings)
    }

    /// Retags one recipe. Factored out so the bulk loop can turn any
    /// failure into a per-item error entry.
    async fn retag_recipe(
        &self,
        credentials: &LlmCredentials,
        vocabulary: &[Tag],
        recipe_id: Uuid,
    ) -> Result<(), CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let ingredients = self.recipe_repository.get_ingredients(recipe_id).await?;
        let ingredients_text = ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join("، ");
        let current_tags = self.tag_repository.get_by_recipe(recipe_id).await?;

        let prompt = prompts::tag_prompt(&recipe.name, &ingredients_text, vocabulary, &current_tags);
        let reply = self
            .llm_client
            .generate_text(
                credentials.clone(),
                prompt,
                prompts::tag_response_schema(),
            )
            .await?;

        let reply: TagReply = serde_json::from_str(strip_code_fences(&reply))
            .map_err(|e| CoreError::MalformedReply(e.to_string()))?;

        let mut tag_ids = Vec::with_capacity(reply.tags.len());
        for name in reply.tags {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let tag = self.tag_repository.find_or_create(name.to_string()).await?;
            if !tag_ids.contains(&tag.id) {
                tag_ids.push(tag.id);
            }
        }

        self.recipe_repository.sync_tags(recipe_id, tag_ids).await
    }
}

impl<U, RE, IN, TA, CI, AU, RV, LI, RP, SE, LLM, HC> StructuringService
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
    async fn structure_content(
        &self,
        _identity: Identity,
        input: StructureContentInput,
    ) -> Result<StructuredContent, CoreError> {
        if input.ingredients_text.trim().is_empty() && input.steps_text.trim().is_empty() {
            return Err(CoreError::Validation(
                "nothing to structure, both texts are empty".to_string(),
            ));
        }

        let credentials = self.llm_credentials().await?;
        let vocabulary = self.tag_repository.list().await?;

        let prompt = prompts::structure_prompt(
            &input.ingredients_text,
            &input.steps_text,
            input.locale.as_deref(),
            &vocabulary,
        );
        let reply = self
            .llm_client
            .generate_text(credentials, prompt, prompts::structure_response_schema())
            .await?;

        serde_json::from_str(strip_code_fences(&reply))
            .map_err(|e| CoreError::MalformedReply(e.to_string()))
    }

    async fn bulk_tag(
        &self,
        identity: Identity,
        recipe_ids: Vec<Uuid>,
    ) -> Result<BulkTagOutcome, CoreError> {
        ensure_policy(
            Ok(identity.is_moderator()),
            "insufficient permissions to retag recipes",
        )?;
        if recipe_ids.is_empty() {
            return Err(CoreError::Validation("no recipe ids given".to_string()));
        }

        let credentials = self.llm_credentials().await?;
        let vocabulary = self.tag_repository.list().await?;

        let total = recipe_ids.len() as u64;
        let mut success_count = 0u64;
        let mut errors = Vec::new();

        for (index, recipe_id) in recipe_ids.into_iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(BULK_TAG_DELAY).await;
            }
            match self.retag_recipe(&credentials, &vocabulary, recipe_id).await {
                Ok(()) => success_count += 1,
                Err(err) => {
                    tracing::warn!(%recipe_id, error = %err, "bulk retag item failed");
                    errors.push(BulkTagError {
                        recipe_id,
                        message: err.to_string(),
                    });
                }
            }
        }

        Ok(BulkTagOutcome {
            success_count,
            total,
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        common::services::test_support::{identity_with_role, mocked_service},
        recipe::entities::{Difficulty, Recipe, RecipeOwner, Sections},
        settings::entities::SiteSettings,
        user::entities::UserRole,
    };

    fn sample_recipe() -> Recipe {
        let owner = Uuid::new_v4();
        Recipe::new(
            "شوربة عدس".to_string(),
            None,
            None,
            Sections::default(),
            Difficulty::Easy,
            Sections::default(),
            RecipeOwner::User(owner),
            None,
            owner,
            true,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn bulk_tag_records_per_item_failures_and_keeps_going() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let missing = ids[1];
        let mut service = mocked_service();

        service.settings_repository.expect_load().returning(|| {
            Box::pin(ready(Ok(SiteSettings {
                gemini_api_key: Some("key".to_string()),
                ..SiteSettings::default()
            })))
        });
        service
            .tag_repository
            .expect_list()
            .returning(|| Box::pin(ready(Ok(vec![]))));
        service
            .recipe_repository
            .expect_get_by_id()
            .times(3)
            .returning(move |id| {
                let found = if id == missing {
                    None
                } else {
                    Some(sample_recipe())
                };
                Box::pin(ready(Ok(found)))
            });
        service
            .recipe_repository
            .expect_get_ingredients()
            .returning(|_| Box::pin(ready(Ok(vec![]))));
        service
            .tag_repository
            .expect_get_by_recipe()
            .returning(|_| Box::pin(ready(Ok(vec![]))));
        service
            .llm_client
            .expect_generate_text()
            .times(2)
            .returning(|_, _, _| {
                Box::pin(ready(Ok(
                    "```json\n{\"tags\": [\"حساء\"]}\n```".to_string()
                )))
            });
        service
            .tag_repository
            .expect_find_or_create()
            .returning(|name| Box::pin(ready(Ok(Tag::new(name)))));
        service
            .recipe_repository
            .expect_sync_tags()
            .times(2)
            .returning(|_, _| Box::pin(ready(Ok(()))));

        let outcome = service
            .bulk_tag(identity_with_role(UserRole::Moderator), ids)
            .await
            .unwrap();

        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.success_count, 2);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].recipe_id, missing);
    }

    #[tokio::test]
    async fn bulk_tag_is_moderator_only() {
        let service = mocked_service();

        let err = service
            .bulk_tag(identity_with_role(UserRole::User), vec![Uuid::new_v4()])
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
    }
}
