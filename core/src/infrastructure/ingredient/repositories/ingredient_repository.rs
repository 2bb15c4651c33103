use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Ingredient, ports::IngredientRepository},
};
use crate::entity::{
    ingredients::{
        ActiveModel as IngredientActiveModel, Column as IngredientColumn,
        Entity as IngredientEntity,
    },
    recipe_ingredients::{Column as PivotColumn, Entity as PivotEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn get_by_normalized(&self, normalized_name: &str) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find()
            .filter(IngredientColumn::NormalizedName.eq(normalized_name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by normalized name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn find_or_create(&self, name: String) -> Result<Ingredient, CoreError> {
        let ingredient = Ingredient::new(name);

        if let Some(existing) = self.get_by_normalized(&ingredient.normalized_name).await? {
            return Ok(existing);
        }

        let inserted = IngredientEntity::insert(IngredientActiveModel {
            id: Set(ingredient.id),
            name: Set(ingredient.name),
            normalized_name: Set(ingredient.normalized_name.clone()),
        })
        .exec_with_returning(&self.db)
        .await;

        match inserted {
            Ok(model) => Ok(Ingredient::from(model)),
            // Lost the unique-key race; the winner's row is the answer.
            Err(_) => self
                .get_by_normalized(&ingredient.normalized_name)
                .await?
                .ok_or_else(|| {
                    error!("Ingredient insert failed and re-fetch found nothing");
                    CoreError::InternalServerError
                }),
        }
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn list(&self) -> Result<Vec<Ingredient>, CoreError> {
        let ingredients = IngredientEntity::find()
            .order_by_asc(IngredientColumn::NormalizedName)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Ingredient::from)
            .collect();

        Ok(ingredients)
    }

    async fn delete(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        PivotEntity::delete_many()
            .filter(PivotColumn::IngredientId.eq(ingredient_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to detach ingredient pivots: {}", e);
                CoreError::InternalServerError
            })?;

        IngredientEntity::delete_by_id(ingredient_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
