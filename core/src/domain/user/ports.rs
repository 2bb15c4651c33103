use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserRole},
        value_objects::{BulkUsersInput, Identity},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn delete_many(&self, ids: Vec<Uuid>) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn set_role_many(
        &self,
        ids: Vec<Uuid>,
        role: UserRole,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_users(&self, identity: Identity)
    -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    /// Admin batch over users. Returns the number of affected rows.
    fn bulk_users(
        &self,
        identity: Identity,
        input: BulkUsersInput,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
