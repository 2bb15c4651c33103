use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCityInput {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateCityInput {
    pub city_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}
