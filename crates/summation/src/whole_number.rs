//! Non-negative integer input type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::SummationError;

/// An integer known to be zero or greater.
///
/// # Examples
/// ```
/// use summation::{SummationError, WholeNumber};
///
/// assert_eq!(WholeNumber::try_from(10_i64).map(WholeNumber::get), Ok(10));
/// assert_eq!(
///     WholeNumber::try_from(-1_i64),
///     Err(SummationError::Negative { value: -1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WholeNumber(u64);

impl WholeNumber {
    /// Wrap an unsigned value. Every `u64` is already whole.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the wrapped value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for WholeNumber {
    type Error = SummationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| SummationError::Negative { value })
    }
}

impl FromStr for WholeNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("expected an integer, received: {s}"))?;
        Self::try_from(value).map_err(|err| err.to_string())
    }
}

impl fmt::Display for WholeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
