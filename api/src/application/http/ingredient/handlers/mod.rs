pub mod delete_ingredient;
pub mod get_ingredients;
