use crate::domain::city::entities::City;
use crate::entity::cities::Model as CityModel;

impl From<CityModel> for City {
    fn from(model: CityModel) -> Self {
        City {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            image: model.image,
        }
    }
}
