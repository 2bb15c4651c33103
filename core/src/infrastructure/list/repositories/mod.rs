pub mod list_repository;
