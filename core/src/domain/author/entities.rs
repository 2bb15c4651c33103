use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// Byline for recipes submitted without a registered account, usually
/// imported heritage recipes credited to a named home cook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnonymousAuthor {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
}

impl AnonymousAuthor {
    pub fn new(name: String, bio: Option<String>) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
            bio,
        }
    }
}
