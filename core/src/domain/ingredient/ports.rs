use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::entities::Ingredient,
    user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// Find-or-create by normalized name. The first-seen display spelling
    /// wins; an insert that loses the unique-key race re-fetches the row
    /// the winner created.
    fn find_or_create(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Admin-only removal. Detaches every recipe pivot first.
    fn delete(&self, ingredient_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn get_ingredients(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Recipe edits never remove an ingredient row; this is the one
    /// explicit path, and it detaches every recipe association first.
    fn delete_ingredient(
        &self,
        identity: Identity,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
