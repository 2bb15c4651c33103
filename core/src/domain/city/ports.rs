use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    city::{
        entities::City,
        value_objects::{CreateCityInput, UpdateCityInput},
    },
    common::entities::app_errors::CoreError,
    user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait CityRepository: Send + Sync {
    fn get_by_id(&self, city_id: Uuid)
    -> impl Future<Output = Result<Option<City>, CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<City>, CoreError>> + Send;

    fn create(&self, city: City) -> impl Future<Output = Result<City, CoreError>> + Send;

    fn update(&self, city: City) -> impl Future<Output = Result<City, CoreError>> + Send;

    fn count_recipes(&self, city_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Moves every dependent recipe to `target_city_id` and removes the city,
    /// in one transaction.
    fn reassign_and_delete(
        &self,
        city_id: Uuid,
        target_city_id: Option<Uuid>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CityService: Send + Sync {
    fn get_cities(&self) -> impl Future<Output = Result<Vec<City>, CoreError>> + Send;

    fn get_city(&self, city_id: Uuid) -> impl Future<Output = Result<City, CoreError>> + Send;

    fn create_city(
        &self,
        identity: Identity,
        input: CreateCityInput,
    ) -> impl Future<Output = Result<City, CoreError>> + Send;

    fn update_city(
        &self,
        identity: Identity,
        input: UpdateCityInput,
    ) -> impl Future<Output = Result<City, CoreError>> + Send;

    /// Deletion rules: blocked for the configured default city; recipes are
    /// reassigned to the default city; blocked with a conflict when recipes
    /// exist and no default is configured.
    fn delete_city(
        &self,
        identity: Identity,
        city_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_cities(
        &self,
        identity: Identity,
        ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
