pub mod mappers;
pub mod repositories;

pub use repositories::city_repository::PostgresCityRepository;
