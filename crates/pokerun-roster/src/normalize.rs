//! Creature name normalization.
//!
//! Eligibility and duplicate detection compare names after trimming and
//! lowercasing. Storage keeps the casing the owner typed.

/// Case- and whitespace-insensitive identity of a creature name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreatureKey(String);

impl CreatureKey {
    /// Normalize a raw name. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// The normalized form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `raw` normalizes to this key.
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().to_lowercase() == self.0
    }
}

impl core::fmt::Display for CreatureKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
