use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, revision::entities::RecipeRevision};

#[cfg_attr(test, mockall::automock)]
pub trait RevisionRepository: Send + Sync {
    fn append(
        &self,
        revision: RecipeRevision,
    ) -> impl Future<Output = Result<RecipeRevision, CoreError>> + Send;

    /// Newest first.
    fn list_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeRevision>, CoreError>> + Send;

    /// Hard-deletes the whole history of one recipe. Individual revisions
    /// cannot be removed selectively.
    fn clear_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
