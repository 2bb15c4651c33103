use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    city::{entities::City, ports::CityRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::{
    cities::{ActiveModel as CityActiveModel, Column as CityColumn, Entity as CityEntity},
    recipes::{Column as RecipeColumn, Entity as RecipeEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresCityRepository {
    pub db: DatabaseConnection,
}

impl PostgresCityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CityRepository for PostgresCityRepository {
    async fn get_by_id(&self, city_id: Uuid) -> Result<Option<City>, CoreError> {
        let city = CityEntity::find_by_id(city_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get city by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(City::from);

        Ok(city)
    }

    async fn list(&self) -> Result<Vec<City>, CoreError> {
        let cities = CityEntity::find()
            .order_by_asc(CityColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list cities: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(City::from)
            .collect();

        Ok(cities)
    }

    async fn create(&self, city: City) -> Result<City, CoreError> {
        let created = CityEntity::insert(CityActiveModel {
            id: Set(city.id),
            name: Set(city.name),
            slug: Set(city.slug),
            description: Set(city.description),
            image: Set(city.image),
        })
        .exec_with_returning(&self.db)
        .await
        .map(City::from)
        .map_err(|e| {
            error!("Failed to create city: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn update(&self, city: City) -> Result<City, CoreError> {
        let updated = CityEntity::update(CityActiveModel {
            id: Set(city.id),
            name: Set(city.name),
            slug: Set(city.slug),
            description: Set(city.description),
            image: Set(city.image),
        })
        .filter(CityColumn::Id.eq(city.id))
        .exec(&self.db)
        .await
        .map(City::from)
        .map_err(|e| {
            error!("Failed to update city: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn count_recipes(&self, city_id: Uuid) -> Result<u64, CoreError> {
        RecipeEntity::find()
            .filter(RecipeColumn::CityId.eq(city_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count city recipes: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn reassign_and_delete(
        &self,
        city_id: Uuid,
        target_city_id: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        RecipeEntity::update_many()
            .col_expr(RecipeColumn::CityId, Expr::value(target_city_id))
            .filter(RecipeColumn::CityId.eq(city_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to reassign city recipes: {}", e);
                CoreError::InternalServerError
            })?;

        CityEntity::delete_by_id(city_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete city: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit city delete: {}", e);
            CoreError::InternalServerError
        })
    }
}
