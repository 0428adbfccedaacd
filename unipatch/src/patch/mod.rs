//! Patch metadata and version-pattern matching.
//!
//! A patch declares the editor versions it applies to with a regular
//! expression. Matching uses search semantics: the pattern has to find a
//! match somewhere within the version string, not span all of it. Patterns
//! are compiled when a match is attempted; a malformed pattern surfaces as
//! [`PatchError::InvalidPattern`] at that point rather than being validated
//! up front or silently skipped.

use regex::Regex;
use thiserror::Error;

/// Errors raised while evaluating a patch against a version string.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The patch's version pattern is not a valid regular expression.
    #[error("invalid version pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A patch applicable to Unity editor versions matching a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchInfo {
    /// Human-readable patch name.
    pub name: String,

    /// Version pattern (regular expression) selecting the installations
    /// this patch applies to.
    pub version: String,
}

impl PatchInfo {
    /// Create a new patch description.
    ///
    /// # Example
    ///
    /// ```
    /// use unipatch::PatchInfo;
    ///
    /// let patch = PatchInfo::new("2021 LTS", r"^2021\.");
    /// assert_eq!(patch.name, "2021 LTS");
    /// ```
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Whether this patch applies to the given version string.
    pub fn applies_to(&self, version: &str) -> Result<bool, PatchError> {
        let pattern = Regex::new(&self.version).map_err(|source| PatchError::InvalidPattern {
            pattern: self.version.clone(),
            source,
        })?;
        Ok(pattern.is_match(version))
    }
}
