//! Domain types and models

pub mod filter;
pub mod profile;

pub use filter::FilterCriteria;
pub use profile::{Availability, ExperienceLevel, Profile, ProfileDraft, Role};

/// Toggle membership of `value` in `set`: add if absent, remove if present.
///
/// Shared by the draft-form collections and the filter dimensions, which both
/// behave as toggle-sets of strings or enum values in the UI flows.
pub(crate) fn toggle_membership<T: PartialEq>(set: &mut Vec<T>, value: T) {
    if let Some(pos) = set.iter().position(|v| *v == value) {
        set.remove(pos);
    } else {
        set.push(value);
    }
}
