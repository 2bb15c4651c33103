use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One named (or unnamed) group of ordered text items. Steps and
/// preparation times are both stored in this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Section {
    pub name: Option<String>,
    pub items: Vec<String>,
}

/// Canonical ordered group list. Legacy content stored steps as a flat
/// string list and times as a single string or a group-name map; all of
/// those collapse into this one shape at the boundary so business logic
/// never branches on wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Sections(pub Vec<Section>);

impl Sections {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|s| s.items.is_empty())
    }

    /// All items in order, group boundaries dropped.
    pub fn flatten(&self) -> Vec<String> {
        self.0.iter().flat_map(|s| s.items.iter().cloned()).collect()
    }
}

impl From<Vec<Section>> for Sections {
    fn from(groups: Vec<Section>) -> Self {
        Sections(groups)
    }
}
