pub mod mappers;
pub mod repositories;

pub use repositories::revision_repository::PostgresRevisionRepository;
