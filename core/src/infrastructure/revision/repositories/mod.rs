pub mod revision_repository;
