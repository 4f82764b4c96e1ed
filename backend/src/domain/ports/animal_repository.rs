//! Port abstraction for animal persistence adapters.
use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Animal, AnimalChanges, AnimalDraft, AnimalFilters, ResourceId};

use super::{ListPage, RepositoryError};

/// Port for storing and querying animals.
///
/// Listings are ordered newest first: `created_at` descending, then `id`
/// descending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Insert a new animal, returning the stored record.
    async fn create(&self, draft: &AnimalDraft) -> Result<Animal, RepositoryError>;

    /// Fetch an animal by identifier.
    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Animal>, RepositoryError>;

    /// Page through animals matching `filters`.
    async fn list(
        &self,
        filters: &AnimalFilters,
        page: PageRequest,
    ) -> Result<ListPage<Animal>, RepositoryError>;

    /// Apply `changes` in one conditional write and touch `updated_at`.
    ///
    /// Returns `None` when no animal has this identifier.
    async fn update(
        &self,
        id: ResourceId,
        changes: &AnimalChanges,
    ) -> Result<Option<Animal>, RepositoryError>;

    /// Delete an animal, reporting whether a row was removed.
    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError>;
}
