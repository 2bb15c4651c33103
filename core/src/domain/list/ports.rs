use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    list::{
        entities::RecipeList,
        value_objects::{BulkListsInput, CreateListInput, ToggleOutcome, UpdateListInput},
    },
    user::value_objects::Identity,
};

/// Column payload for one bulk list status statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatusChange {
    Approve,
    Reject,
    Unpublish,
}

#[cfg_attr(test, mockall::automock)]
pub trait ListRepository: Send + Sync {
    fn create(&self, list: RecipeList)
    -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn update(&self, list: RecipeList)
    -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn get_by_id(
        &self,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Option<RecipeList>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeList>, CoreError>> + Send;

    fn get_default(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<RecipeList>, CoreError>> + Send;

    fn delete(&self, list_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Default lists are skipped by the statement, never deleted.
    fn delete_many(&self, ids: Vec<Uuid>) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn recipe_count(&self, list_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Adds the recipe at the end of the ordered membership, or removes it
    /// when already present.
    fn toggle_recipe(
        &self,
        list_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<ToggleOutcome, CoreError>> + Send;

    /// Default lists are excluded from the statement for approve.
    fn set_status_many(
        &self,
        ids: Vec<Uuid>,
        change: ListStatusChange,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ListService: Send + Sync {
    /// The caller's own lists. Creates the default list lazily on first
    /// access.
    fn get_lists(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<RecipeList>, CoreError>> + Send;

    fn get_list(
        &self,
        identity: Option<Identity>,
        list_id: Uuid,
    ) -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn create_list(
        &self,
        identity: Identity,
        input: CreateListInput,
    ) -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn update_list(
        &self,
        identity: Identity,
        input: UpdateListInput,
    ) -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn delete_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn toggle_recipe(
        &self,
        identity: Identity,
        list_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<ToggleOutcome, CoreError>> + Send;

    fn request_publish(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn approve_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn reject_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn unpublish_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<RecipeList, CoreError>> + Send;

    fn bulk_lists(
        &self,
        identity: Identity,
        input: BulkListsInput,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait ListPolicy: Send + Sync {
    fn can_view(&self, identity: Option<&Identity>, list: &RecipeList) -> bool;

    fn can_manage(&self, identity: &Identity, list: &RecipeList) -> bool;

    fn can_moderate(&self, identity: &Identity) -> bool;

    /// Owner of an approved list or any moderator.
    fn can_unpublish(&self, identity: &Identity, list: &RecipeList) -> bool;
}
