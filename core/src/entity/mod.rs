pub mod anonymous_authors;
pub mod cities;
pub mod ingredients;
pub mod recipe_ingredients;
pub mod recipe_list_recipes;
pub mod recipe_lists;
pub mod recipe_revisions;
pub mod recipe_tags;
pub mod recipes;
pub mod reports;
pub mod settings;
pub mod tags;
pub mod users;
