pub mod tag_repository;
