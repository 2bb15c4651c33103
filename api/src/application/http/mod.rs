pub mod city;
pub mod health;
pub mod ingredient;
pub mod list;
pub mod recipe;
pub mod report;
pub mod server;
pub mod settings;
pub mod structuring;
pub mod tag;
pub mod user;
