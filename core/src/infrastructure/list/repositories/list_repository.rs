use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    list::{
        entities::RecipeList,
        ports::{ListRepository, ListStatusChange},
        value_objects::ToggleOutcome,
    },
};
use crate::entity::{
    recipe_list_recipes::{
        ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as MemberEntity,
    },
    recipe_lists::{ActiveModel as ListActiveModel, Column as ListColumn, Entity as ListEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresListRepository {
    pub db: DatabaseConnection,
}

impl PostgresListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(list: &RecipeList) -> ListActiveModel {
    ListActiveModel {
        id: Set(list.id),
        user_id: Set(list.user_id),
        name: Set(list.name.clone()),
        slug: Set(list.slug.clone()),
        description: Set(list.description.clone()),
        cover_image: Set(list.cover_image.clone()),
        is_default: Set(list.is_default),
        is_public: Set(list.is_public),
        status: Set(list.status.as_str().to_string()),
        created_at: Set(list.created_at.naive_utc()),
        updated_at: Set(list.updated_at.naive_utc()),
    }
}

impl ListRepository for PostgresListRepository {
    async fn create(&self, list: RecipeList) -> Result<RecipeList, CoreError> {
        let created = ListEntity::insert(active_model(&list))
            .exec_with_returning(&self.db)
            .await
            .map(RecipeList::from)
            .map_err(|e| {
                error!("Failed to create list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn update(&self, list: RecipeList) -> Result<RecipeList, CoreError> {
        let updated = ListEntity::update(active_model(&list))
            .filter(ListColumn::Id.eq(list.id))
            .exec(&self.db)
            .await
            .map(RecipeList::from)
            .map_err(|e| {
                error!("Failed to update list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated)
    }

    async fn get_by_id(&self, list_id: Uuid) -> Result<Option<RecipeList>, CoreError> {
        let list = ListEntity::find_by_id(list_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get list by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(RecipeList::from);

        Ok(list)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<RecipeList>, CoreError> {
        let lists = ListEntity::find()
            .filter(ListColumn::UserId.eq(user_id))
            .order_by_desc(ListColumn::IsDefault)
            .order_by_desc(ListColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get lists by user: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(RecipeList::from)
            .collect();

        Ok(lists)
    }

    async fn get_default(&self, user_id: Uuid) -> Result<Option<RecipeList>, CoreError> {
        let list = ListEntity::find()
            .filter(ListColumn::UserId.eq(user_id))
            .filter(ListColumn::IsDefault.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get default list: {}", e);
                CoreError::InternalServerError
            })?
            .map(RecipeList::from);

        Ok(list)
    }

    async fn delete(&self, list_id: Uuid) -> Result<(), CoreError> {
        ListEntity::delete_by_id(list_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn delete_many(&self, ids: Vec<Uuid>) -> Result<u64, CoreError> {
        let result = ListEntity::delete_many()
            .filter(ListColumn::Id.is_in(ids))
            .filter(ListColumn::IsDefault.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete lists: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn recipe_count(&self, list_id: Uuid) -> Result<u64, CoreError> {
        MemberEntity::find()
            .filter(MemberColumn::ListId.eq(list_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count list recipes: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn toggle_recipe(
        &self,
        list_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<ToggleOutcome, CoreError> {
        let existing = MemberEntity::find_by_id((list_id, recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check list membership: {}", e);
                CoreError::InternalServerError
            })?;

        if existing.is_some() {
            MemberEntity::delete_by_id((list_id, recipe_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to remove list recipe: {}", e);
                    CoreError::InternalServerError
                })?;
            return Ok(ToggleOutcome::Removed);
        }

        // New members go to the end of the ordered membership.
        let next_order: Option<i32> = MemberEntity::find()
            .filter(MemberColumn::ListId.eq(list_id))
            .select_only()
            .column_as(MemberColumn::SortOrder.max(), "max_sort_order")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to read list sort order: {}", e);
                CoreError::InternalServerError
            })?
            .flatten();

        MemberEntity::insert(MemberActiveModel {
            list_id: Set(list_id),
            recipe_id: Set(recipe_id),
            sort_order: Set(next_order.unwrap_or(-1) + 1),
            created_at: Set(Utc::now().naive_utc()),
        })
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to add list recipe: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ToggleOutcome::Added)
    }

    async fn set_status_many(
        &self,
        ids: Vec<Uuid>,
        change: ListStatusChange,
    ) -> Result<u64, CoreError> {
        let (status, is_public) = match change {
            ListStatusChange::Approve => ("approved", true),
            ListStatusChange::Reject => ("rejected", false),
            ListStatusChange::Unpublish => ("private", false),
        };

        let mut update = ListEntity::update_many()
            .col_expr(ListColumn::Status, Expr::value(status))
            .col_expr(ListColumn::IsPublic, Expr::value(is_public))
            .col_expr(
                ListColumn::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(ListColumn::Id.is_in(ids));

        // The default list can never become public.
        if matches!(change, ListStatusChange::Approve) {
            update = update.filter(ListColumn::IsDefault.eq(false));
        }

        let result = update.exec(&self.db).await.map_err(|e| {
            error!("Failed to bulk update list status: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(result.rows_affected)
    }
}
