use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, tag::entities::Tag, user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait TagRepository: Send + Sync {
    /// Find-or-create by exact name. Insert races on the unique name are
    /// resolved by re-fetching.
    fn find_or_create(&self, name: String) -> impl Future<Output = Result<Tag, CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<Tag>, CoreError>> + Send;

    fn get_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Tag>, CoreError>> + Send;

    /// Detaches recipe pivots, then removes the tag rows.
    fn delete_many(&self, ids: Vec<Uuid>) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TagService: Send + Sync {
    fn get_tags(&self) -> impl Future<Output = Result<Vec<Tag>, CoreError>> + Send;

    fn delete_tags(
        &self,
        identity: Identity,
        ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
