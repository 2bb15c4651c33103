use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_uuid_v7, slugify};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tag {
    pub id: Uuid,
    /// Unique. Resolution is by exact name, no normalization.
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn new(name: String) -> Self {
        let slug = slugify(&name);
        Self {
            id: generate_uuid_v7(),
            name,
            slug,
        }
    }
}
