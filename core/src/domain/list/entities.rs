use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7, slugify};

pub const DEFAULT_LIST_NAME: &str = "المفضلة";

/// Minimum membership before a list may be submitted for review.
pub const MIN_PUBLISHABLE_RECIPES: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    Draft,
    Review,
    Approved,
    Rejected,
    Private,
}

impl ListStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ListStatus::Draft => "draft",
            ListStatus::Review => "review",
            ListStatus::Approved => "approved",
            ListStatus::Rejected => "rejected",
            ListStatus::Private => "private",
        }
    }
}

impl From<&str> for ListStatus {
    fn from(s: &str) -> Self {
        match s {
            "review" => ListStatus::Review,
            "approved" => ListStatus::Approved,
            "rejected" => ListStatus::Rejected,
            "private" => ListStatus::Private,
            _ => ListStatus::Draft,
        }
    }
}

/// A user-curated, ordered collection of recipes with its own publish
/// workflow. Every user owns exactly one default list ("favorites") which
/// is never deletable and never public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub is_default: bool,
    pub is_public: bool,
    pub status: ListStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeList {
    pub fn new(
        user_id: Uuid,
        name: String,
        description: Option<String>,
        cover_image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let slug = slugify(&name);
        Self {
            id: generate_uuid_v7(),
            user_id,
            name,
            slug,
            description,
            cover_image,
            is_default: false,
            is_public: false,
            status: ListStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_default(user_id: Uuid) -> Self {
        let mut list = Self::new(user_id, DEFAULT_LIST_NAME.to_string(), None, None);
        list.is_default = true;
        list.status = ListStatus::Private;
        list
    }

    /// Field update. The default list can never be made public; the attempt
    /// fails loudly instead of being silently ignored. Flipping `is_public`
    /// is the owner's unpublish/republish round trip: a previously approved
    /// list goes `approved ⇄ private` directly, anything else must pass
    /// review first.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        cover_image: Option<String>,
        is_public: Option<bool>,
    ) -> Result<(), CoreError> {
        if let Some(true) = is_public {
            if self.is_default {
                return Err(CoreError::Validation(
                    "the default list cannot be made public".to_string(),
                ));
            }
            if !matches!(self.status, ListStatus::Approved | ListStatus::Private) {
                return Err(CoreError::Validation(
                    "a list must pass review before it can be made public".to_string(),
                ));
            }
        }
        if let Some(name) = name {
            self.slug = slugify(&name);
            self.name = name;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(cover_image) = cover_image {
            self.cover_image = Some(cover_image);
        }
        if let Some(is_public) = is_public {
            if is_public {
                self.status = ListStatus::Approved;
                self.is_public = true;
            } else {
                if self.status == ListStatus::Approved {
                    self.status = ListStatus::Private;
                }
                self.is_public = false;
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Submits for review. Needs at least two recipes; a cover image is
    /// recommended but not enforced.
    pub fn request_publish(&mut self, recipe_count: u64) -> Result<(), CoreError> {
        if self.is_default {
            return Err(CoreError::Validation(
                "the default list cannot be published".to_string(),
            ));
        }
        if recipe_count < MIN_PUBLISHABLE_RECIPES {
            return Err(CoreError::Validation(format!(
                "a list needs at least {MIN_PUBLISHABLE_RECIPES} recipes before it can be published"
            )));
        }
        self.status = ListStatus::Review;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn approve(&mut self) -> Result<(), CoreError> {
        if self.is_default {
            return Err(CoreError::Validation(
                "the default list cannot be made public".to_string(),
            ));
        }
        self.status = ListStatus::Approved;
        self.is_public = true;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Public + rejected is an invalid combination, so rejection also drops
    /// visibility.
    pub fn reject(&mut self) {
        self.status = ListStatus::Rejected;
        self.is_public = false;
        self.updated_at = Utc::now();
    }

    pub fn unpublish(&mut self) {
        self.status = ListStatus::Private;
        self.is_public = false;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> RecipeList {
        RecipeList::new(Uuid::new_v4(), "أطباق رمضان".to_string(), None, None)
    }

    #[test]
    fn new_list_starts_as_private_draft() {
        let list = list();
        assert_eq!(list.status, ListStatus::Draft);
        assert!(!list.is_public);
        assert!(!list.is_default);
    }

    #[test]
    fn default_list_can_never_be_made_public() {
        let mut list = RecipeList::new_default(Uuid::new_v4());
        let err = list.update(None, None, None, Some(true)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(!list.is_public);

        assert!(list.request_publish(10).is_err());
        assert!(list.approve().is_err());
    }

    #[test]
    fn request_publish_requires_more_than_one_recipe() {
        let mut list = list();
        assert!(matches!(
            list.request_publish(0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            list.request_publish(1),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(list.status, ListStatus::Draft);

        list.request_publish(2).unwrap();
        assert_eq!(list.status, ListStatus::Review);
    }

    #[test]
    fn approve_makes_the_list_public() {
        let mut list = list();
        list.request_publish(3).unwrap();
        list.approve().unwrap();
        assert_eq!(list.status, ListStatus::Approved);
        assert!(list.is_public);
    }

    #[test]
    fn reject_forces_private_visibility() {
        let mut list = list();
        list.request_publish(2).unwrap();
        list.is_public = true;
        list.reject();
        assert_eq!(list.status, ListStatus::Rejected);
        assert!(!list.is_public);
    }

    #[test]
    fn unpublish_and_republish_round_trip() {
        let mut list = list();
        list.request_publish(2).unwrap();
        list.approve().unwrap();

        list.unpublish();
        assert_eq!(list.status, ListStatus::Private);
        assert!(!list.is_public);

        // A previously approved list republishes without another review.
        list.update(None, None, None, Some(true)).unwrap();
        assert_eq!(list.status, ListStatus::Approved);
        assert!(list.is_public);
    }

    #[test]
    fn a_draft_cannot_be_made_public_directly() {
        let mut list = list();
        let err = list.update(None, None, None, Some(true)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(list.status, ListStatus::Draft);
        assert!(!list.is_public);
    }

    #[test]
    fn owner_unpublish_via_update_parks_an_approved_list_as_private() {
        let mut list = list();
        list.request_publish(2).unwrap();
        list.approve().unwrap();

        list.update(None, None, None, Some(false)).unwrap();
        assert_eq!(list.status, ListStatus::Private);
        assert!(!list.is_public);
    }

    #[test]
    fn rejected_list_resubmits_through_review() {
        let mut list = list();
        list.request_publish(2).unwrap();
        list.reject();
        list.request_publish(2).unwrap();
        assert_eq!(list.status, ListStatus::Review);
    }
}
