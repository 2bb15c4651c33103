pub mod author;
pub mod city;
pub mod common;
pub mod health;
pub mod ingredient;
pub mod list;
pub mod recipe;
pub mod report;
pub mod revision;
pub mod settings;
pub mod structuring;
pub mod tag;
pub mod user;
