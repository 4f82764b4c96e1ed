//! In-process repositories used when no database URL is configured.
//!
//! Records live in a `BTreeMap` behind a tokio `RwLock`; identifiers come from
//! a monotonically increasing counter, and timestamps from the injected
//! [`Clock`](mockable::Clock). Each write takes the lock once, so the
//! conditional update and delete semantics match the Diesel adapters.

mod animals;
mod members;

use std::collections::BTreeMap;

use pagination::PageRequest;

use crate::domain::ResourceId;
use crate::domain::ports::{ListPage, RepositoryError};

pub use animals::InMemoryAnimalRepository;
pub use members::InMemoryMemberRepository;

/// Rows keyed by identifier plus the next identifier to hand out.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<ResourceId, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> Result<ResourceId, RepositoryError> {
        let id = ResourceId::new(self.next_id)
            .ok_or_else(|| RepositoryError::query("identifier sequence exhausted"))?;
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::query("identifier sequence exhausted"))?;
        Ok(id)
    }
}

/// Slice `matching` (already ordered) down to the requested page.
fn paginate<T>(matching: Vec<T>, page: PageRequest) -> ListPage<T> {
    let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
    let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let take = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    let items = matching.into_iter().skip(skip).take(take).collect();
    ListPage::new(items, total)
}
