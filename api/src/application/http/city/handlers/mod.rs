pub mod bulk_cities;
pub mod create_city;
pub mod delete_city;
pub mod get_cities;
pub mod get_city;
pub mod update_city;
