use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    tag::{entities::Tag, ports::TagRepository},
};
use crate::entity::{
    recipe_tags::{Column as RecipeTagColumn, Entity as RecipeTagEntity},
    tags::{ActiveModel as TagActiveModel, Column as TagColumn, Entity as TagEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresTagRepository {
    pub db: DatabaseConnection,
}

impl PostgresTagRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Tag>, CoreError> {
        let tag = TagEntity::find()
            .filter(TagColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get tag by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Tag::from);

        Ok(tag)
    }
}

impl TagRepository for PostgresTagRepository {
    async fn find_or_create(&self, name: String) -> Result<Tag, CoreError> {
        if let Some(existing) = self.get_by_name(&name).await? {
            return Ok(existing);
        }

        let tag = Tag::new(name);
        let inserted = TagEntity::insert(TagActiveModel {
            id: Set(tag.id),
            name: Set(tag.name.clone()),
            slug: Set(tag.slug),
        })
        .exec_with_returning(&self.db)
        .await;

        match inserted {
            Ok(model) => Ok(Tag::from(model)),
            // Lost the unique-name race; the winner's row is the answer.
            Err(_) => self.get_by_name(&tag.name).await?.ok_or_else(|| {
                error!("Tag insert failed and re-fetch found nothing");
                CoreError::InternalServerError
            }),
        }
    }

    async fn list(&self) -> Result<Vec<Tag>, CoreError> {
        let tags = TagEntity::find()
            .order_by_asc(TagColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list tags: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Tag::from)
            .collect();

        Ok(tags)
    }

    async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<Tag>, CoreError> {
        let tag_ids: Vec<Uuid> = RecipeTagEntity::find()
            .filter(RecipeTagColumn::RecipeId.eq(recipe_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe tag pivots: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(|p| p.tag_id)
            .collect();

        let tags = TagEntity::find()
            .filter(TagColumn::Id.is_in(tag_ids))
            .order_by_asc(TagColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get tags by recipe: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Tag::from)
            .collect();

        Ok(tags)
    }

    async fn delete_many(&self, ids: Vec<Uuid>) -> Result<u64, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        RecipeTagEntity::delete_many()
            .filter(RecipeTagColumn::TagId.is_in(ids.clone()))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to detach tag pivots: {}", e);
                CoreError::InternalServerError
            })?;

        let result = TagEntity::delete_many()
            .filter(TagColumn::Id.is_in(ids))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete tags: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit tag delete: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(result.rows_affected)
    }
}
