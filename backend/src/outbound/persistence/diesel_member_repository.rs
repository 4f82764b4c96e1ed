//! PostgreSQL-backed `MemberRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{ListPage, MemberRepository, RepositoryError};
use crate::domain::{Member, MemberChanges, MemberDraft, MemberFilters, ResourceId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MemberRow, MemberUpdate, NewMemberRow};
use super::pool::DbPool;
use super::query_bounds::{contains_pattern, row_count, window};
use super::schema::members;

/// Diesel-backed implementation of the member repository port.
#[derive(Clone)]
pub struct DieselMemberRepository {
    pool: DbPool,
}

impl DieselMemberRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Boxed `members` query carrying every present substring filter.
fn filtered(filters: &MemberFilters) -> members::BoxedQuery<'static, Pg> {
    let mut query = members::table.into_boxed();
    if let Some(full_name) = filters.full_name.as_deref() {
        query = query.filter(members::full_name.ilike(contains_pattern(full_name)));
    }
    if let Some(email) = filters.email.as_deref() {
        query = query.filter(members::email.ilike(contains_pattern(email)));
    }
    query
}

fn row_to_member(row: MemberRow) -> Result<Member, RepositoryError> {
    let id = ResourceId::new(row.id).ok_or_else(|| {
        RepositoryError::query(format!("stored member id {} is not positive", row.id))
    })?;
    Ok(Member {
        id,
        full_name: row.full_name,
        email: row.email,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl MemberRepository for DieselMemberRepository {
    async fn create(&self, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewMemberRow {
            full_name: &draft.full_name,
            email: &draft.email,
        };

        let row = diesel::insert_into(members::table)
            .values(&new_row)
            .returning(MemberRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_member(row)
    }

    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Member>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        members::table
            .find(id.get())
            .select(MemberRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_member)
            .transpose()
    }

    async fn list(
        &self,
        filters: &MemberFilters,
        page: PageRequest,
    ) -> Result<ListPage<Member>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (limit, offset) = window(page);

        let total: i64 = filtered(filters)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<MemberRow> = filtered(filters)
            .order(members::id.asc())
            .limit(limit)
            .offset(offset)
            .select(MemberRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(row_to_member)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ListPage::new(items, row_count(total)))
    }

    async fn update(
        &self,
        id: ResourceId,
        changes: &MemberChanges,
    ) -> Result<Option<Member>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let update = MemberUpdate {
            full_name: changes.full_name.as_deref(),
            email: changes.email.as_deref(),
        };

        diesel::update(members::table.find(id.get()))
            .set((update, members::updated_at.eq(diesel::dsl::now)))
            .returning(MemberRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_member)
            .transpose()
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(members::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
