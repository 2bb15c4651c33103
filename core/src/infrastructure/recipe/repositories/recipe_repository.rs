use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait, UpdateMany,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeIngredientDetail},
        ports::{RecipeRepository, StatusChange},
        value_objects::{GetRecipesFilter, RecipeIngredientRow},
    },
};
use crate::entity::{
    ingredients::{Column as IngredientColumn, Entity as IngredientEntity},
    recipe_ingredients::{
        ActiveModel as PivotActiveModel, Column as PivotColumn, Entity as PivotEntity,
    },
    recipe_tags::{
        ActiveModel as RecipeTagActiveModel, Column as RecipeTagColumn, Entity as RecipeTagEntity,
    },
    recipes::{ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(recipe: &Recipe) -> Result<RecipeActiveModel, CoreError> {
    let steps = serde_json::to_value(&recipe.steps).map_err(|e| {
        error!("Failed to serialize recipe steps: {}", e);
        CoreError::InternalServerError
    })?;
    let time_needed = serde_json::to_value(&recipe.time_needed).map_err(|e| {
        error!("Failed to serialize recipe time_needed: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(RecipeActiveModel {
        id: Set(recipe.id),
        name: Set(recipe.name.clone()),
        slug: Set(recipe.slug.clone()),
        image: Set(recipe.image.clone()),
        servings: Set(recipe.servings.clone()),
        time_needed: Set(time_needed),
        difficulty: Set(recipe.difficulty.as_str().to_string()),
        status: Set(recipe.status.as_str().to_string()),
        needs_reapproval: Set(recipe.needs_reapproval),
        rejection_reason: Set(recipe.rejection_reason.clone()),
        steps: Set(steps),
        user_id: Set(recipe.owner.user_id()),
        anonymous_author_id: Set(recipe.owner.author_id()),
        city_id: Set(recipe.city_id),
        approved_by: Set(recipe.approved_by),
        approved_at: Set(recipe.approved_at.map(|dt| dt.naive_utc())),
        created_at: Set(recipe.created_at.naive_utc()),
        updated_at: Set(recipe.updated_at.naive_utc()),
    })
}

/// One bulk status statement. Approve resets the full approval column set
/// the way a single approve does; reject writes only status and reason,
/// leaving `needs_reapproval` and the approval audit columns untouched,
/// matching `Recipe::reject`.
fn status_update(change: StatusChange) -> UpdateMany<RecipeEntity> {
    let now = Utc::now().naive_utc();
    let update = RecipeEntity::update_many();

    let update = match change {
        StatusChange::Approve { approved_by } => update
            .col_expr(RecipeColumn::Status, Expr::value("approved"))
            .col_expr(RecipeColumn::NeedsReapproval, Expr::value(false))
            .col_expr(
                RecipeColumn::RejectionReason,
                Expr::value(Option::<String>::None),
            )
            .col_expr(RecipeColumn::ApprovedBy, Expr::value(approved_by))
            .col_expr(RecipeColumn::ApprovedAt, Expr::value(now)),
        StatusChange::Reject { reason } => update
            .col_expr(RecipeColumn::Status, Expr::value("rejected"))
            .col_expr(RecipeColumn::RejectionReason, Expr::value(reason)),
        StatusChange::Unpublish => update
            .col_expr(RecipeColumn::Status, Expr::value("unpublished"))
            .col_expr(RecipeColumn::NeedsReapproval, Expr::value(false)),
    };

    update.col_expr(RecipeColumn::UpdatedAt, Expr::value(now))
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let model = RecipeEntity::insert(active_model(&recipe)?)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Recipe::try_from(model)
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let model = RecipeEntity::update(active_model(&recipe)?)
            .filter(RecipeColumn::Id.eq(recipe.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Recipe::try_from(model)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        RecipeEntity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::try_from)
            .transpose()
    }

    async fn list(&self, filter: GetRecipesFilter) -> Result<Vec<Recipe>, CoreError> {
        let mut query = RecipeEntity::find();

        if let Some(status) = filter.status {
            query = query.filter(RecipeColumn::Status.eq(status.as_str()));
        }
        if let Some(city_id) = filter.city_id {
            query = query.filter(RecipeColumn::CityId.eq(city_id));
        }
        if let Some(owner_user_id) = filter.owner_user_id {
            query = query.filter(RecipeColumn::UserId.eq(owner_user_id));
        }
        if let Some(search) = filter.search {
            query = query.filter(RecipeColumn::Name.contains(&search));
        }
        if let Some(tag_id) = filter.tag_id {
            query = query.filter(
                RecipeColumn::Id.in_subquery(
                    Query::select()
                        .column(RecipeTagColumn::RecipeId)
                        .from(RecipeTagEntity)
                        .and_where(RecipeTagColumn::TagId.eq(tag_id))
                        .to_owned(),
                ),
            );
        }

        query = query.order_by_desc(RecipeColumn::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }
        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Recipe::try_from)
            .collect()
    }

    async fn delete(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        RecipeEntity::delete_by_id(recipe_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn slug_exists(&self, slug: String, exclude: Option<Uuid>) -> Result<bool, CoreError> {
        let mut query = RecipeEntity::find().filter(RecipeColumn::Slug.eq(slug));
        if let Some(recipe_id) = exclude {
            query = query.filter(RecipeColumn::Id.ne(recipe_id));
        }

        let count = query.count(&self.db).await.map_err(|e| {
            error!("Failed to check recipe slug: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(count > 0)
    }

    async fn delete_many(&self, ids: Vec<Uuid>) -> Result<u64, CoreError> {
        let result = RecipeEntity::delete_many()
            .filter(RecipeColumn::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn set_status_many(
        &self,
        ids: Vec<Uuid>,
        change: StatusChange,
    ) -> Result<u64, CoreError> {
        let result = status_update(change)
            .filter(RecipeColumn::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to bulk update recipe status: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn sync_ingredients(
        &self,
        recipe_id: Uuid,
        rows: Vec<RecipeIngredientRow>,
    ) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        PivotEntity::delete_many()
            .filter(PivotColumn::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        if !rows.is_empty() {
            let models = rows.into_iter().map(|row| PivotActiveModel {
                recipe_id: Set(recipe_id),
                ingredient_id: Set(row.ingredient_id),
                amount: Set(row.amount),
                unit: Set(row.unit),
                descriptor: Set(row.descriptor),
                group_name: Set(row.group),
                sort_order: Set(row.sort_order),
            });

            PivotEntity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to insert recipe ingredients: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit ingredient sync: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn get_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredientDetail>, CoreError> {
        let pivots = PivotEntity::find()
            .filter(PivotColumn::RecipeId.eq(recipe_id))
            .order_by_asc(PivotColumn::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let ingredient_ids: Vec<Uuid> = pivots.iter().map(|p| p.ingredient_id).collect();
        let names: HashMap<Uuid, String> = IngredientEntity::find()
            .filter(IngredientColumn::Id.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to resolve ingredient names: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(|i| (i.id, i.name))
            .collect();

        let details = pivots
            .into_iter()
            .filter_map(|p| {
                names.get(&p.ingredient_id).map(|name| RecipeIngredientDetail {
                    name: name.clone(),
                    amount: p.amount,
                    unit: p.unit,
                    descriptor: p.descriptor,
                    group: p.group_name,
                })
            })
            .collect();

        Ok(details)
    }

    async fn sync_tags(&self, recipe_id: Uuid, tag_ids: Vec<Uuid>) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        RecipeTagEntity::delete_many()
            .filter(RecipeTagColumn::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear recipe tags: {}", e);
                CoreError::InternalServerError
            })?;

        if !tag_ids.is_empty() {
            let models = tag_ids.into_iter().map(|tag_id| RecipeTagActiveModel {
                recipe_id: Set(recipe_id),
                tag_id: Set(tag_id),
            });

            RecipeTagEntity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to insert recipe tags: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit tag sync: {}", e);
            CoreError::InternalServerError
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn bulk_reject_touches_only_status_reason_and_timestamp() {
        let sql = status_update(StatusChange::Reject {
            reason: "spam".to_string(),
        })
        .build(DbBackend::Postgres)
        .to_string();

        assert!(sql.contains("\"status\""));
        assert!(sql.contains("\"rejection_reason\""));
        assert!(sql.contains("\"updated_at\""));
        assert!(!sql.contains("needs_reapproval"));
        assert!(!sql.contains("approved_by"));
        assert!(!sql.contains("approved_at"));
    }

    #[test]
    fn bulk_approve_resets_the_full_approval_column_set() {
        let sql = status_update(StatusChange::Approve {
            approved_by: Uuid::new_v4(),
        })
        .build(DbBackend::Postgres)
        .to_string();

        assert!(sql.contains("\"status\""));
        assert!(sql.contains("needs_reapproval"));
        assert!(sql.contains("rejection_reason"));
        assert!(sql.contains("approved_by"));
        assert!(sql.contains("approved_at"));
    }
}
