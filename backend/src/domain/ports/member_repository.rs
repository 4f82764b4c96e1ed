//! Port abstraction for member persistence adapters.
use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Member, MemberChanges, MemberDraft, MemberFilters, ResourceId};

use super::{ListPage, RepositoryError};

/// Port for storing and querying members.
///
/// Listings are ordered by `id` ascending. Writes that would duplicate an
/// email fail with [`RepositoryError::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a new member, returning the stored record.
    async fn create(&self, draft: &MemberDraft) -> Result<Member, RepositoryError>;

    /// Fetch a member by identifier.
    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Member>, RepositoryError>;

    /// Page through members matching `filters`.
    async fn list(
        &self,
        filters: &MemberFilters,
        page: PageRequest,
    ) -> Result<ListPage<Member>, RepositoryError>;

    /// Apply `changes` in one conditional write and touch `updated_at`.
    async fn update(
        &self,
        id: ResourceId,
        changes: &MemberChanges,
    ) -> Result<Option<Member>, RepositoryError>;

    /// Delete a member, reporting whether a row was removed.
    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError>;
}
