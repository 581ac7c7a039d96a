//! Builder profile types
//!
//! Profiles are persisted as JSON with camelCase keys so records created by
//! earlier releases round-trip by field name.

use serde::{Deserialize, Serialize};

use super::toggle_membership;

/// Primary role of a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Founder,
    Developer,
    Designer,
    ProductManager,
    Marketing,
}

/// Self-reported experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Senior,
    Expert,
}

/// Weekly availability for collaboration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    FullTime,
    PartTime,
    Weekends,
    Flexible,
}

/// A candidate or self-authored builder record.
///
/// `id` is derived from the creation timestamp in milliseconds, which keeps
/// identifiers unique and monotonically increasing without coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub bio: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default)]
    pub looking_for: Vec<String>,
    #[serde(default)]
    pub project_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// Marks the active user's own record; used only to exclude it from the
    /// candidate pool.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_current_user: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl Profile {
    /// External GitHub profile link, if a handle was provided.
    ///
    /// Handles are stored in `github.com/username` form.
    pub fn github_url(&self) -> Option<String> {
        self.github.as_ref().map(|handle| format!("https://{handle}"))
    }

    /// External Twitter profile link, if a handle was provided.
    pub fn twitter_url(&self) -> Option<String> {
        self.twitter
            .as_ref()
            .map(|handle| format!("https://twitter.com/{}", handle.trim_start_matches('@')))
    }

    /// External Telegram deep link, if a handle was provided.
    pub fn telegram_url(&self) -> Option<String> {
        self.telegram
            .as_ref()
            .map(|handle| format!("https://t.me/{}", handle.trim_start_matches('@')))
    }

    /// Twitter intent URL that opens a prefilled introduction message.
    ///
    /// Fire-and-forget: nothing in the engine depends on the outcome of the
    /// external navigation.
    pub fn twitter_intent_url(&self) -> String {
        format!(
            "https://twitter.com/intent/tweet?text={}",
            urlencoding::encode(&self.intro_message())
        )
    }

    /// Telegram share URL carrying the same introduction message.
    pub fn telegram_share_url(&self) -> String {
        format!(
            "https://t.me/share/url?url=https://buidlmatch.com&text={}",
            urlencoding::encode(&self.intro_message())
        )
    }

    fn intro_message(&self) -> String {
        format!(
            "Hi {}! We matched on BuidlMatch. I'd love to discuss potential collaboration \
             opportunities. Let's build something amazing together!",
            self.name
        )
    }
}

/// Mutable form state for an in-progress profile submission.
///
/// The three list fields behave as toggle-sets: selecting an entry that is
/// already present removes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub role: Option<Role>,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default)]
    pub looking_for: Vec<String>,
    #[serde(default)]
    pub project_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

impl ProfileDraft {
    /// Toggle a skill selection.
    pub fn toggle_skill(&mut self, skill: impl Into<String>) {
        toggle_membership(&mut self.skills, skill.into());
    }

    /// Toggle a "looking for" selection.
    pub fn toggle_looking_for(&mut self, item: impl Into<String>) {
        toggle_membership(&mut self.looking_for, item.into());
    }

    /// Toggle a project-type selection.
    pub fn toggle_project_type(&mut self, project_type: impl Into<String>) {
        toggle_membership(&mut self.project_types, project_type.into());
    }

    /// Whether the draft is complete enough to submit.
    ///
    /// Name, role, and bio must be non-empty and at least one skill selected.
    /// Enforced at creation time only, never retroactively.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && self.role.is_some()
            && !self.bio.trim().is_empty()
            && !self.skills.is_empty()
    }

    /// Finalize the draft into a persisted-shape profile.
    ///
    /// Returns `None` when the draft is incomplete or has no role selected.
    /// The caller supplies the identifier (creation timestamp millis) and the
    /// record is marked as the active user's own.
    pub fn into_profile(self, id: i64) -> Option<Profile> {
        if !self.is_complete() {
            return None;
        }
        let role = self.role?;
        Some(Profile {
            id,
            name: self.name,
            role,
            bio: self.bio,
            skills: self.skills,
            experience: self.experience,
            location: self.location,
            timezone: self.timezone,
            github: self.github,
            twitter: self.twitter,
            telegram: self.telegram,
            looking_for: self.looking_for,
            project_types: self.project_types,
            availability: self.availability,
            is_current_user: true,
        })
    }
}
