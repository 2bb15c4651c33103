pub mod approve_recipe;
pub mod bulk_recipes;
pub mod clear_revisions;
pub mod create_recipe;
pub mod delete_recipe;
pub mod get_recipe;
pub mod get_recipes;
pub mod get_revisions;
pub mod reject_recipe;
pub mod unpublish_recipe;
pub mod update_recipe;
