use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeDetail, RecipeIngredientDetail},
        value_objects::{
            BulkRecipesInput, CreateRecipeInput, GetRecipesFilter, RecipeIngredientRow,
            UpdateRecipeInput,
        },
    },
    revision::entities::RecipeRevision,
    user::value_objects::Identity,
};

/// Column payload for a single bulk status statement. The repository turns
/// this into one `UPDATE … WHERE id IN (…)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    /// Resets approver/approved_at/needs_reapproval/rejection_reason the
    /// same way a single approve does.
    Approve { approved_by: Uuid },
    Reject { reason: String },
    Unpublish,
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn list(
        &self,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// True when a recipe other than `exclude` already holds the slug.
    fn slug_exists(
        &self,
        slug: String,
        exclude: Option<Uuid>,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Removes the row; ingredient and tag pivots cascade, the ingredient
    /// and tag rows themselves survive.
    fn delete(&self, recipe_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_many(&self, ids: Vec<Uuid>) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn set_status_many(
        &self,
        ids: Vec<Uuid>,
        change: StatusChange,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Full atomic replace of the recipe's ingredient pivot rows.
    fn sync_ingredients(
        &self,
        recipe_id: Uuid,
        rows: Vec<RecipeIngredientRow>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeIngredientDetail>, CoreError>> + Send;

    /// Full replace of the recipe's tag set.
    fn sync_tags(
        &self,
        recipe_id: Uuid,
        tag_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn get_recipes(
        &self,
        identity: Option<Identity>,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Visibility rule: a non-approved recipe resolves for its owner and
    /// for moderators; anyone else gets `NotFound`.
    fn get_recipe(
        &self,
        identity: Option<Identity>,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn approve_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn reject_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        reason: String,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn unpublish_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn bulk_recipes(
        &self,
        identity: Identity,
        input: BulkRecipesInput,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn get_revisions(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeRevision>, CoreError>> + Send;

    fn clear_revisions(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Authorization rules for the recipe aggregate.
pub trait RecipePolicy: Send + Sync {
    fn can_view(&self, identity: Option<&Identity>, recipe: &Recipe) -> bool;

    fn can_edit(&self, identity: &Identity, recipe: &Recipe) -> bool;

    fn can_approve(&self, identity: &Identity) -> bool;

    /// Stricter than approve: hard deletion is admin-only.
    fn can_delete(&self, identity: &Identity) -> bool;

    /// Revision history may be cleared by the recipe's owner or by an actor
    /// with delete privilege.
    fn can_clear_revisions(&self, identity: &Identity, recipe: &Recipe) -> bool;
}
