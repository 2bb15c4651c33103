use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    revision::{entities::RecipeRevision, ports::RevisionRepository},
};
use crate::entity::recipe_revisions::{
    ActiveModel as RevisionActiveModel, Column as RevisionColumn, Entity as RevisionEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRevisionRepository {
    pub db: DatabaseConnection,
}

impl PostgresRevisionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RevisionRepository for PostgresRevisionRepository {
    async fn append(&self, revision: RecipeRevision) -> Result<RecipeRevision, CoreError> {
        let content = serde_json::to_value(&revision.content).map_err(|e| {
            error!("Failed to serialize revision content: {}", e);
            CoreError::InternalServerError
        })?;

        let model = RevisionEntity::insert(RevisionActiveModel {
            id: Set(revision.id),
            recipe_id: Set(revision.recipe_id),
            user_id: Set(revision.user_id),
            content: Set(content),
            change_summary: Set(revision.change_summary),
            created_at: Set(revision.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to append revision: {}", e);
            CoreError::InternalServerError
        })?;

        RecipeRevision::try_from(model)
    }

    async fn list_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<RecipeRevision>, CoreError> {
        RevisionEntity::find()
            .filter(RevisionColumn::RecipeId.eq(recipe_id))
            .order_by_desc(RevisionColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list revisions: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(RecipeRevision::try_from)
            .collect()
    }

    async fn clear_by_recipe(&self, recipe_id: Uuid) -> Result<u64, CoreError> {
        let result = RevisionEntity::delete_many()
            .filter(RevisionColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear revisions: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
