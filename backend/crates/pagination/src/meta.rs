//! Metadata describing a served page.

use serde::{Deserialize, Serialize};

use crate::PageRequest;

/// Pagination block returned alongside a page of items.
///
/// Serialises as `{"total", "limit", "offset", "hasMore"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Number of items matching the filters across all pages.
    pub total: u64,
    /// Page size that was applied.
    pub limit: u32,
    /// Offset that was applied.
    pub offset: u64,
    /// Whether items remain after this page.
    pub has_more: bool,
}

impl PageMeta {
    /// Describe the page served for `request` out of `total` matches.
    #[must_use]
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            total,
            limit: request.limit(),
            offset: request.offset(),
            has_more: has_more(request.offset(), request.limit(), total),
        }
    }
}

/// Return `true` iff `offset + limit < total`.
///
/// # Examples
/// ```
/// use pagination::has_more;
///
/// assert!(has_more(0, 10, 11));
/// assert!(!has_more(0, 10, 10));
/// ```
#[must_use]
pub fn has_more(offset: u64, limit: u32, total: u64) -> bool {
    offset.saturating_add(u64::from(limit)) < total
}
