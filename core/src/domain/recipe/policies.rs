use crate::domain::{
    common::policies::WasfaPolicy,
    recipe::{
        entities::{Recipe, RecipeStatus},
        ports::RecipePolicy,
    },
    user::value_objects::Identity,
};

impl RecipePolicy for WasfaPolicy {
    fn can_view(&self, identity: Option<&Identity>, recipe: &Recipe) -> bool {
        if recipe.status == RecipeStatus::Approved {
            return true;
        }
        match identity {
            Some(identity) => identity.is_moderator() || recipe.is_owned_by(identity.id()),
            None => false,
        }
    }

    fn can_edit(&self, identity: &Identity, recipe: &Recipe) -> bool {
        identity.is_moderator() || recipe.is_owned_by(identity.id())
    }

    fn can_approve(&self, identity: &Identity) -> bool {
        identity.is_moderator()
    }

    fn can_delete(&self, identity: &Identity) -> bool {
        identity.is_admin()
    }

    fn can_clear_revisions(&self, identity: &Identity, recipe: &Recipe) -> bool {
        self.can_delete(identity) || recipe.is_owned_by(identity.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::{Difficulty, RecipeOwner, Sections};
    use crate::domain::user::entities::{User, UserRole};
    use chrono::Utc;
    use uuid::Uuid;

    fn identity(role: UserRole) -> Identity {
        Identity::User(User {
            id: Uuid::new_v4(),
            name: "sam".to_string(),
            email: "sam@example.com".to_string(),
            avatar: None,
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    fn pending_recipe(owner: RecipeOwner) -> Recipe {
        Recipe::new(
            "فتوش".to_string(),
            None,
            None,
            Sections::default(),
            Difficulty::Easy,
            Sections::default(),
            owner,
            None,
            Uuid::new_v4(),
            false,
        )
    }

    #[test]
    fn pending_recipe_is_invisible_to_public_and_strangers() {
        let policy = WasfaPolicy::new();
        let recipe = pending_recipe(RecipeOwner::User(Uuid::new_v4()));

        assert!(!policy.can_view(None, &recipe));
        let stranger = identity(UserRole::User);
        assert!(!policy.can_view(Some(&stranger), &recipe));
    }

    #[test]
    fn pending_recipe_is_visible_to_owner_and_moderator() {
        let policy = WasfaPolicy::new();
        let owner = identity(UserRole::User);
        let recipe = pending_recipe(RecipeOwner::User(owner.id()));

        assert!(policy.can_view(Some(&owner), &recipe));
        let moderator = identity(UserRole::Moderator);
        assert!(policy.can_view(Some(&moderator), &recipe));
    }

    #[test]
    fn delete_is_stricter_than_approve() {
        let policy = WasfaPolicy::new();
        let moderator = identity(UserRole::Moderator);
        assert!(policy.can_approve(&moderator));
        assert!(!policy.can_delete(&moderator));

        let admin = identity(UserRole::Admin);
        assert!(policy.can_delete(&admin));
    }

    #[test]
    fn owner_may_clear_revisions_but_not_delete() {
        let policy = WasfaPolicy::new();
        let owner = identity(UserRole::User);
        let recipe = pending_recipe(RecipeOwner::User(owner.id()));

        assert!(policy.can_clear_revisions(&owner, &recipe));
        assert!(!policy.can_delete(&owner));
    }
}
