use crate::application::http::{
    city::router::CityApiDoc, ingredient::router::IngredientApiDoc, list::router::ListApiDoc,
    recipe::router::RecipeApiDoc, report::router::ReportApiDoc, settings::router::SettingsApiDoc,
    structuring::router::StructuringApiDoc, tag::router::TagApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wasfa API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/lists", api = ListApiDoc),
        (path = "/tags", api = TagApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/cities", api = CityApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/reports", api = ReportApiDoc),
        (path = "/settings", api = SettingsApiDoc),
        (path = "/structuring", api = StructuringApiDoc),
    )
)]
pub struct ApiDoc;
