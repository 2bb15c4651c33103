use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::{User, UserRole};

/// The acting principal for a request. Carries the full user row so
/// policies can check roles without another lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Identity::User(user) => user.role,
        }
    }

    pub fn is_moderator(&self) -> bool {
        self.role().is_moderator()
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BulkUserAction {
    Delete,
    SetRole,
}

#[derive(Debug, Clone)]
pub struct BulkUsersInput {
    pub ids: Vec<Uuid>,
    pub action: BulkUserAction,
    /// Required when the action is `SetRole`.
    pub role: Option<UserRole>,
}
