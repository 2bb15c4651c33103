use crate::domain::{
    common::policies::WasfaPolicy,
    list::{
        entities::{ListStatus, RecipeList},
        ports::ListPolicy,
    },
    user::value_objects::Identity,
};

impl ListPolicy for WasfaPolicy {
    fn can_view(&self, identity: Option<&Identity>, list: &RecipeList) -> bool {
        if list.is_public {
            return true;
        }
        match identity {
            Some(identity) => identity.is_moderator() || list.is_owned_by(identity.id()),
            None => false,
        }
    }

    fn can_manage(&self, identity: &Identity, list: &RecipeList) -> bool {
        identity.is_moderator() || list.is_owned_by(identity.id())
    }

    fn can_moderate(&self, identity: &Identity) -> bool {
        identity.is_moderator()
    }

    fn can_unpublish(&self, identity: &Identity, list: &RecipeList) -> bool {
        if identity.is_moderator() {
            return true;
        }
        list.is_owned_by(identity.id()) && list.status == ListStatus::Approved
    }
}
