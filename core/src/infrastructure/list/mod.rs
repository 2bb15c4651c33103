pub mod mappers;
pub mod repositories;

pub use repositories::list_repository::PostgresListRepository;
