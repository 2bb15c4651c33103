use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_uuid_v7, ingredient::normalize::normalize_ingredient_name};

/// Shared reference row. Created lazily the first time a recipe mentions a
/// name; recipe edits never remove it, only an explicit admin delete does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    /// First-seen display spelling.
    pub name: String,
    /// Unique dedupe key, see [`normalize_ingredient_name`].
    pub normalized_name: String,
}

impl Ingredient {
    pub fn new(name: String) -> Self {
        let normalized_name = normalize_ingredient_name(&name);
        Self {
            id: generate_uuid_v7(),
            name,
            normalized_name,
        }
    }
}
