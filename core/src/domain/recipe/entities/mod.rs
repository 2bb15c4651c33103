pub mod detail;
pub mod recipe;
pub mod sections;

pub use detail::{RecipeDetail, RecipeIngredientDetail, RecipeUser};
pub use recipe::{Difficulty, Recipe, RecipeOwner, RecipeStatus};
pub use sections::{Section, Sections};
