//! Parsing of `limit`/`offset` query parameters.

use serde::Serialize;

/// Page size used when the client does not send a usable `limit`.
pub const DEFAULT_LIMIT: u32 = 50;
/// Smallest page size a client can request.
pub const MIN_LIMIT: u32 = 1;
/// Largest page size a client can request.
pub const MAX_LIMIT: u32 = 100;
/// Offset used when the client does not send a usable `offset`.
pub const DEFAULT_OFFSET: u64 = 0;

/// Sanitised pagination window.
///
/// ## Invariants
/// - `limit` lies in `[MIN_LIMIT, MAX_LIMIT]`.
/// - `offset` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    limit: u32,
    offset: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PageRequest {
    /// Build a window from already-typed values, clamping `limit` into range.
    ///
    /// # Examples
    /// ```
    /// use pagination::{MAX_LIMIT, PageRequest};
    ///
    /// assert_eq!(PageRequest::new(500, 10).limit(), MAX_LIMIT);
    /// ```
    #[must_use]
    pub fn new(limit: u32, offset: u64) -> Self {
        Self {
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
            offset,
        }
    }

    /// Parse raw query-string values.
    ///
    /// Values are trimmed before parsing. Anything that is not a base-10
    /// integer (including the empty string) falls back to the default;
    /// integers are clamped rather than rejected.
    ///
    /// # Examples
    /// ```
    /// use pagination::{DEFAULT_LIMIT, PageRequest};
    ///
    /// let request = PageRequest::from_raw(Some("ten"), None);
    /// assert_eq!(request.limit(), DEFAULT_LIMIT);
    /// assert_eq!(request.offset(), 0);
    /// ```
    #[must_use]
    pub fn from_raw(raw_limit: Option<&str>, raw_offset: Option<&str>) -> Self {
        Self {
            limit: parse_trimmed(raw_limit).map_or(DEFAULT_LIMIT, clamp_limit),
            offset: parse_trimmed(raw_offset).map_or(DEFAULT_OFFSET, clamp_offset),
        }
    }

    /// Maximum number of items in the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items skipped before the page starts.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }
}

fn parse_trimmed(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<i64>().ok())
}

fn clamp_limit(value: i64) -> u32 {
    let clamped = value.clamp(i64::from(MIN_LIMIT), i64::from(MAX_LIMIT));
    u32::try_from(clamped).unwrap_or(DEFAULT_LIMIT)
}

fn clamp_offset(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(DEFAULT_OFFSET)
}
