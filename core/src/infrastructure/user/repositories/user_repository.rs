use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserRole},
        ports::UserRepository,
    },
};
use crate::entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, CoreError> {
        let users = UserEntity::find()
            .order_by_desc(UserColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list users: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(User::from)
            .collect();

        Ok(users)
    }

    async fn delete_many(&self, ids: Vec<Uuid>) -> Result<u64, CoreError> {
        let result = UserEntity::delete_many()
            .filter(UserColumn::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete users: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn set_role_many(&self, ids: Vec<Uuid>, role: UserRole) -> Result<u64, CoreError> {
        let result = UserEntity::update_many()
            .col_expr(
                UserColumn::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .col_expr(
                UserColumn::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now().naive_utc()),
            )
            .filter(UserColumn::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to set user roles: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
