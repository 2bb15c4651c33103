use std::future::Future;
use uuid::Uuid;

use crate::domain::{author::entities::AnonymousAuthor, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait AnonymousAuthorRepository: Send + Sync {
    fn find_or_create(
        &self,
        name: String,
        bio: Option<String>,
    ) -> impl Future<Output = Result<AnonymousAuthor, CoreError>> + Send;

    fn get_by_id(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Option<AnonymousAuthor>, CoreError>> + Send;
}
