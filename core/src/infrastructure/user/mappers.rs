use chrono::{TimeZone, Utc};

use crate::domain::user::entities::{User, UserRole};
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            avatar: model.avatar,
            role: UserRole::from(model.role.as_str()),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}
