#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Canonical form of a Louw-Nida code: an integer with an optional
/// uppercase letter suffix (`"89"`, `"14A"`).
///
/// This is the join key between the lexicon mapping and corpus
/// annotations. Construction does not validate the shape beyond
/// non-emptiness: a token with no digits is still a legal canonical
/// code, it simply never matches anything and surfaces as unmatched.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CanonicalCode(String);

impl CanonicalCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a semantic domain in the lexicon's own scheme
/// (e.g. `"1.14"`), distinct from the Louw-Nida code.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SemDomCode(String);

impl SemDomCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidSemDomCode(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SemDomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
