use crate::domain::ingredient::entities::Ingredient;
use crate::entity::ingredients::Model as IngredientModel;

impl From<IngredientModel> for Ingredient {
    fn from(model: IngredientModel) -> Self {
        Ingredient {
            id: model.id,
            name: model.name,
            normalized_name: model.normalized_name,
        }
    }
}
