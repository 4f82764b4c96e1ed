//! In-memory `MemberRepository` enforcing email uniqueness.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::PageRequest;
use tokio::sync::RwLock;

use crate::domain::ports::{ListPage, MemberRepository, RepositoryError};
use crate::domain::{Member, MemberChanges, MemberDraft, MemberFilters, ResourceId};

use super::{Table, paginate};

/// Member store held in process memory.
pub struct InMemoryMemberRepository {
    table: RwLock<Table<Member>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryMemberRepository {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            clock,
        }
    }
}

/// Fails when a member other than `except` already uses `email`.
fn ensure_unique_email(
    table: &Table<Member>,
    email: &str,
    except: Option<ResourceId>,
) -> Result<(), RepositoryError> {
    let taken = table
        .rows
        .values()
        .any(|member| Some(member.id) != except && member.email == email);
    if taken {
        Err(RepositoryError::conflict("email"))
    } else {
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn create(&self, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        let mut table = self.table.write().await;
        ensure_unique_email(&table, &draft.email, None)?;
        let id = table.allocate_id()?;
        let now = self.clock.utc();
        let member = Member {
            id,
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Member>, RepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(
        &self,
        filters: &MemberFilters,
        page: PageRequest,
    ) -> Result<ListPage<Member>, RepositoryError> {
        let table = self.table.read().await;
        let matching: Vec<Member> = table
            .rows
            .values()
            .filter(|member| filters.matches(member))
            .cloned()
            .collect();
        Ok(paginate(matching, page))
    }

    async fn update(
        &self,
        id: ResourceId,
        changes: &MemberChanges,
    ) -> Result<Option<Member>, RepositoryError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = changes.email.as_deref() {
            ensure_unique_email(&table, email, Some(id))?;
        }
        let now = self.clock.utc();
        Ok(table.rows.get_mut(&id).map(|member| {
            changes.apply_to(member);
            member.updated_at = now;
            member.clone()
        }))
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
