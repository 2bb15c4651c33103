use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    author::{entities::AnonymousAuthor, ports::AnonymousAuthorRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::anonymous_authors::{
    ActiveModel as AuthorActiveModel, Column as AuthorColumn, Entity as AuthorEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresAnonymousAuthorRepository {
    pub db: DatabaseConnection,
}

impl PostgresAnonymousAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AnonymousAuthorRepository for PostgresAnonymousAuthorRepository {
    async fn find_or_create(
        &self,
        name: String,
        bio: Option<String>,
    ) -> Result<AnonymousAuthor, CoreError> {
        let existing = AuthorEntity::find()
            .filter(AuthorColumn::Name.eq(name.clone()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get anonymous author by name: {}", e);
                CoreError::InternalServerError
            })?;

        if let Some(model) = existing {
            return Ok(AnonymousAuthor::from(model));
        }

        let author = AnonymousAuthor::new(name, bio);
        let created = AuthorEntity::insert(AuthorActiveModel {
            id: Set(author.id),
            name: Set(author.name),
            bio: Set(author.bio),
        })
        .exec_with_returning(&self.db)
        .await
        .map(AnonymousAuthor::from)
        .map_err(|e| {
            error!("Failed to create anonymous author: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, author_id: Uuid) -> Result<Option<AnonymousAuthor>, CoreError> {
        let author = AuthorEntity::find_by_id(author_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get anonymous author by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(AnonymousAuthor::from);

        Ok(author)
    }
}
