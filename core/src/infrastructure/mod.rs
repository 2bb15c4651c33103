pub mod author;
pub mod city;
pub mod db;
pub mod health;
pub mod ingredient;
pub mod list;
pub mod llm;
pub mod recipe;
pub mod report;
pub mod revision;
pub mod settings;
pub mod tag;
pub mod user;
