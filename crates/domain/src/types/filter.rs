//! Filter criteria applied to the candidate pool
//!
//! A criteria value is session-scoped: it never persists. Every dimension is
//! optional and an empty dimension places no constraint on candidates.

use serde::{Deserialize, Serialize};

use super::profile::{Availability, ExperienceLevel, Profile, Role};
use super::toggle_membership;

/// Transient predicate specification over the candidate pool.
///
/// Dimensions combine with AND; within a dimension the listed values combine
/// with OR (set membership). Location is a case-insensitive substring match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceLevel>,
    #[serde(default)]
    pub availability: Vec<Availability>,
    #[serde(default)]
    pub location: String,
}

impl FilterCriteria {
    /// Whether `profile` passes every active dimension.
    pub fn matches(&self, profile: &Profile) -> bool {
        if !self.roles.is_empty() && !self.roles.contains(&profile.role) {
            return false;
        }
        if !self.skills.is_empty()
            && !self.skills.iter().any(|skill| profile.skills.contains(skill))
        {
            return false;
        }
        if !self.experience.is_empty() {
            match profile.experience {
                Some(level) if self.experience.contains(&level) => {}
                _ => return false,
            }
        }
        if !self.availability.is_empty() {
            match profile.availability {
                Some(availability) if self.availability.contains(&availability) => {}
                _ => return false,
            }
        }
        if !self.location.is_empty() {
            let needle = self.location.to_lowercase();
            let haystack = profile.location.as_deref().unwrap_or_default().to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Toggle a role selection.
    pub fn toggle_role(&mut self, role: Role) {
        toggle_membership(&mut self.roles, role);
    }

    /// Toggle a skill selection.
    pub fn toggle_skill(&mut self, skill: impl Into<String>) {
        toggle_membership(&mut self.skills, skill.into());
    }

    /// Toggle an experience-level selection.
    pub fn toggle_experience(&mut self, level: ExperienceLevel) {
        toggle_membership(&mut self.experience, level);
    }

    /// Toggle an availability selection.
    pub fn toggle_availability(&mut self, availability: Availability) {
        toggle_membership(&mut self.availability, availability);
    }

    /// Drop every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of active filter entries, for the "N filters active" badge.
    ///
    /// Each selected list entry counts as one; a non-empty location counts as
    /// one regardless of length.
    pub fn active_count(&self) -> usize {
        self.roles.len()
            + self.skills.len()
            + self.experience.len()
            + self.availability.len()
            + usize::from(!self.location.is_empty())
    }
}
