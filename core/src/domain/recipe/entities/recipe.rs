use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7, slugify};
use crate::domain::recipe::entities::sections::Sections;

pub const MAX_REJECTION_REASON_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecipeStatus {
    Pending,
    Approved,
    Rejected,
    Unpublished,
}

impl RecipeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RecipeStatus::Pending => "pending",
            RecipeStatus::Approved => "approved",
            RecipeStatus::Rejected => "rejected",
            RecipeStatus::Unpublished => "unpublished",
        }
    }
}

impl From<&str> for RecipeStatus {
    fn from(s: &str) -> Self {
        match s {
            "approved" => RecipeStatus::Approved,
            "rejected" => RecipeStatus::Rejected,
            "unpublished" => RecipeStatus::Unpublished,
            _ => RecipeStatus::Pending,
        }
    }
}

/// The site's fixed difficulty scale. Wire values are the Arabic display
/// strings the platform has always stored; anything else fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    #[serde(rename = "سهلة جدا")]
    VeryEasy,
    #[serde(rename = "سهلة")]
    Easy,
    #[serde(rename = "متوسطة")]
    Medium,
    #[serde(rename = "صعبة")]
    Hard,
    #[serde(rename = "صعبة جدا")]
    VeryHard,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::VeryEasy => "سهلة جدا",
            Difficulty::Easy => "سهلة",
            Difficulty::Medium => "متوسطة",
            Difficulty::Hard => "صعبة",
            Difficulty::VeryHard => "صعبة جدا",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim() {
            "سهلة جدا" | "سهلة جداً" => Ok(Difficulty::VeryEasy),
            "سهلة" => Ok(Difficulty::Easy),
            "متوسطة" => Ok(Difficulty::Medium),
            "صعبة" => Ok(Difficulty::Hard),
            "صعبة جدا" | "صعبة جداً" => Ok(Difficulty::VeryHard),
            other => Err(CoreError::Validation(format!(
                "unknown difficulty: {other}"
            ))),
        }
    }
}

/// Exactly one owner, decided at construction. Replaces the legacy pair of
/// nullable user/author columns whose mutual exclusion was only enforced by
/// scattered runtime checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RecipeOwner {
    User(Uuid),
    Anonymous(Uuid),
}

impl RecipeOwner {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, RecipeOwner::Anonymous(_))
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            RecipeOwner::User(id) => Some(*id),
            RecipeOwner::Anonymous(_) => None,
        }
    }

    pub fn author_id(&self) -> Option<Uuid> {
        match self {
            RecipeOwner::User(_) => None,
            RecipeOwner::Anonymous(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub servings: Option<String>,
    pub time_needed: Sections,
    pub difficulty: Difficulty,
    pub status: RecipeStatus,
    /// An approved recipe edited by its non-privileged owner goes back to
    /// `Pending` with this flag raised. Invariant: the flag implies
    /// `status == Pending`.
    pub needs_reapproval: bool,
    pub rejection_reason: Option<String>,
    pub steps: Sections,
    pub owner: RecipeOwner,
    pub city_id: Option<Uuid>,
    /// Set and cleared together with `approved_at`.
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Submission. Moderators and admins publish immediately; everyone else
    /// starts in review.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        image: Option<String>,
        servings: Option<String>,
        time_needed: Sections,
        difficulty: Difficulty,
        steps: Sections,
        owner: RecipeOwner,
        city_id: Option<Uuid>,
        submitter: Uuid,
        privileged: bool,
    ) -> Self {
        let now = Utc::now();
        let slug = slugify(&name);
        let (status, approved_by, approved_at) = if privileged {
            (RecipeStatus::Approved, Some(submitter), Some(now))
        } else {
            (RecipeStatus::Pending, None, None)
        };

        Self {
            id: generate_uuid_v7(),
            name,
            slug,
            image,
            servings,
            time_needed,
            difficulty,
            status,
            needs_reapproval: false,
            rejection_reason: None,
            steps,
            owner,
            city_id,
            approved_by,
            approved_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moderation side effect of an edit. A non-privileged edit of an
    /// approved recipe always forces re-review, regardless of which fields
    /// changed; privileged edits never do.
    pub fn apply_edit(&mut self, privileged: bool) {
        if !privileged && self.status == RecipeStatus::Approved {
            self.needs_reapproval = true;
            self.status = RecipeStatus::Pending;
        }
        self.updated_at = Utc::now();
    }

    /// Valid from any non-approved state. Clears the rejection reason and
    /// the reapproval flag, and stamps the approver.
    pub fn approve(&mut self, approver: Uuid) -> Result<(), CoreError> {
        if self.status == RecipeStatus::Approved {
            return Err(CoreError::Validation(
                "recipe is already approved".to_string(),
            ));
        }
        let now = Utc::now();
        self.status = RecipeStatus::Approved;
        self.needs_reapproval = false;
        self.rejection_reason = None;
        self.approved_by = Some(approver);
        self.approved_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Requires a non-empty reason of at most 500 characters. Leaves the
    /// reapproval flag untouched.
    pub fn reject(&mut self, reason: String) -> Result<(), CoreError> {
        let reason = reason.trim().to_string();
        if reason.is_empty() {
            return Err(CoreError::Validation(
                "a rejection reason is required".to_string(),
            ));
        }
        if reason.chars().count() > MAX_REJECTION_REASON_LEN {
            return Err(CoreError::Validation(format!(
                "rejection reason must be at most {MAX_REJECTION_REASON_LEN} characters"
            )));
        }
        self.status = RecipeStatus::Rejected;
        self.rejection_reason = Some(reason);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Takes the recipe off the site without discarding the approval
    /// metadata, so an unpublished recipe stays distinguishable from one
    /// that was never approved.
    pub fn unpublish(&mut self) {
        self.status = RecipeStatus::Unpublished;
        self.needs_reapproval = false;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner.user_id() == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(privileged: bool) -> Recipe {
        Recipe::new(
            "كبة مقلية".to_string(),
            None,
            Some("4".to_string()),
            Sections::default(),
            Difficulty::Medium,
            Sections::default(),
            RecipeOwner::User(Uuid::new_v4()),
            None,
            Uuid::new_v4(),
            privileged,
        )
    }

    #[test]
    fn plain_submission_starts_pending_without_approver() {
        let recipe = sample(false);
        assert_eq!(recipe.status, RecipeStatus::Pending);
        assert!(recipe.approved_by.is_none());
        assert!(recipe.approved_at.is_none());
        assert!(!recipe.needs_reapproval);
    }

    #[test]
    fn privileged_submission_is_approved_immediately() {
        let recipe = sample(true);
        assert_eq!(recipe.status, RecipeStatus::Approved);
        assert!(recipe.approved_by.is_some());
        assert!(recipe.approved_at.is_some());
    }

    #[test]
    fn non_privileged_edit_of_approved_recipe_forces_reapproval() {
        let mut recipe = sample(true);
        recipe.apply_edit(false);
        assert_eq!(recipe.status, RecipeStatus::Pending);
        assert!(recipe.needs_reapproval);
        // Past approval metadata is kept for the audit trail.
        assert!(recipe.approved_by.is_some());
    }

    #[test]
    fn privileged_edit_never_forces_reapproval() {
        let mut recipe = sample(true);
        recipe.apply_edit(true);
        assert_eq!(recipe.status, RecipeStatus::Approved);
        assert!(!recipe.needs_reapproval);
    }

    #[test]
    fn edit_of_pending_recipe_keeps_it_pending_without_flag() {
        let mut recipe = sample(false);
        recipe.apply_edit(false);
        assert_eq!(recipe.status, RecipeStatus::Pending);
        assert!(!recipe.needs_reapproval);
    }

    #[test]
    fn approve_clears_rejection_state_from_any_prior_state() {
        let moderator = Uuid::new_v4();
        let mut recipe = sample(false);
        recipe.reject("قليلة التفاصيل".to_string()).unwrap();
        recipe.needs_reapproval = true;
        recipe.status = RecipeStatus::Pending;

        recipe.approve(moderator).unwrap();
        assert_eq!(recipe.status, RecipeStatus::Approved);
        assert_eq!(recipe.approved_by, Some(moderator));
        assert!(recipe.approved_at.is_some());
        assert!(recipe.rejection_reason.is_none());
        assert!(!recipe.needs_reapproval);
    }

    #[test]
    fn approving_an_approved_recipe_is_rejected() {
        let mut recipe = sample(true);
        assert!(matches!(
            recipe.approve(Uuid::new_v4()),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn reject_requires_a_reason() {
        let mut recipe = sample(false);
        assert!(matches!(
            recipe.reject("   ".to_string()),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn reject_caps_reason_length() {
        let mut recipe = sample(false);
        let reason = "x".repeat(MAX_REJECTION_REASON_LEN + 1);
        assert!(matches!(
            recipe.reject(reason),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn reject_does_not_touch_needs_reapproval() {
        let mut recipe = sample(true);
        recipe.apply_edit(false);
        assert!(recipe.needs_reapproval);
        recipe.reject("صور غير واضحة".to_string()).unwrap();
        assert_eq!(recipe.status, RecipeStatus::Rejected);
        assert!(recipe.needs_reapproval);
    }

    #[test]
    fn unpublish_keeps_approval_metadata() {
        let mut recipe = sample(true);
        recipe.unpublish();
        assert_eq!(recipe.status, RecipeStatus::Unpublished);
        assert!(recipe.approved_by.is_some());
        assert!(recipe.approved_at.is_some());
    }

    #[test]
    fn unpublished_recipe_can_be_approved_again() {
        let mut recipe = sample(true);
        recipe.unpublish();
        recipe.approve(Uuid::new_v4()).unwrap();
        assert_eq!(recipe.status, RecipeStatus::Approved);
    }

    #[test]
    fn difficulty_parses_the_five_known_values_only() {
        for v in ["سهلة جدا", "سهلة", "متوسطة", "صعبة", "صعبة جدا"] {
            assert!(Difficulty::parse(v).is_ok(), "{v}");
        }
        assert!(Difficulty::parse("easy").is_err());
        assert!(Difficulty::parse("").is_err());
    }

    #[test]
    fn owner_is_exactly_one_of_user_or_anonymous() {
        let user = RecipeOwner::User(Uuid::new_v4());
        assert!(user.user_id().is_some());
        assert!(user.author_id().is_none());

        let anon = RecipeOwner::Anonymous(Uuid::new_v4());
        assert!(anon.user_id().is_none());
        assert!(anon.author_id().is_some());
        assert!(anon.is_anonymous());
    }
}
