//! Store-assigned record identifier.

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationErrors;

/// Reported when a path identifier is not a positive integer.
pub const INVALID_ID: &str = "Invalid ID parameter - must be a positive integer";

/// Positive integer identifier assigned by the store on creation.
///
/// # Examples
/// ```
/// use shelter::domain::ResourceId;
///
/// assert_eq!(ResourceId::parse(" 42 ").map(ResourceId::get), Ok(42));
/// assert!(ResourceId::parse("0").is_err());
/// assert!(ResourceId::parse("7abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(i64);

impl ResourceId {
    /// Wrap `value` when it is positive.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Parse a raw path segment.
    ///
    /// The segment is trimmed and must be a base-10 integer greater than zero
    /// in its entirety.
    ///
    /// # Errors
    ///
    /// Returns the single [`INVALID_ID`] message otherwise.
    pub fn parse(raw: &str) -> Result<Self, ValidationErrors> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ValidationErrors::single(INVALID_ID))
    }

    /// The wrapped integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
