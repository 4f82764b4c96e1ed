//! One page of a filtered listing.

/// Items on the requested page plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<T> {
    /// Records on this page, already ordered.
    pub items: Vec<T>,
    /// Records matching the filters across all pages.
    pub total: u64,
}

impl<T> ListPage<T> {
    /// Bundle a page of `items` with the overall `total`.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}
