use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_uuid_v7, slugify};

/// Regional cuisine taxonomy. A recipe references at most one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl City {
    pub fn new(name: String, description: Option<String>, image: Option<String>) -> Self {
        let slug = slugify(&name);
        Self {
            id: generate_uuid_v7(),
            name,
            slug,
            description,
            image,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        image: Option<String>,
    ) {
        if let Some(name) = name {
            self.slug = slugify(&name);
            self.name = name;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(image) = image {
            self.image = Some(image);
        }
    }
}
