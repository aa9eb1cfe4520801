use serde::{Deserialize, Serialize};

/// The free-text career profile a user fills in before requesting a report.
///
/// Every field may be empty individually; a profile is submittable as soon
/// as any one field carries text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub background: String,
    pub skills: String,
    pub interests: String,
    pub goals: String,
    pub availability: String,
}

impl Profile {
    /// True iff at least one field is non-whitespace.
    pub fn has_content(&self) -> bool {
        [
            &self.background,
            &self.skills,
            &self.interests,
            &self.goals,
            &self.availability,
        ]
        .iter()
        .any(|field| !field.trim().is_empty())
    }
}
