//! PostgreSQL-backed `AnimalRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{AnimalRepository, ListPage, RepositoryError};
use crate::domain::{Animal, AnimalChanges, AnimalDraft, AnimalFilters, AnimalSize, ResourceId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AnimalRow, AnimalUpdate, NewAnimalRow};
use super::pool::DbPool;
use super::query_bounds::{row_count, window};
use super::schema::animals;

/// Diesel-backed implementation of the animal repository port.
#[derive(Clone)]
pub struct DieselAnimalRepository {
    pool: DbPool,
}

impl DieselAnimalRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Boxed `animals` query carrying every present equality filter.
fn filtered(filters: &AnimalFilters) -> animals::BoxedQuery<'_, Pg> {
    let mut query = animals::table.into_boxed();
    if let Some(species) = filters.species.as_deref() {
        query = query.filter(animals::species.eq(species));
    }
    if let Some(breed) = filters.breed.as_deref() {
        query = query.filter(animals::breed.eq(breed));
    }
    if let Some(size) = filters.size {
        query = query.filter(animals::size.eq(size.as_str()));
    }
    if let Some(location) = filters.location.as_deref() {
        query = query.filter(animals::location.eq(location));
    }
    if let Some(age) = filters.age {
        query = query.filter(animals::age.eq(age));
    }
    query
}

/// Convert a database row into a domain animal.
fn row_to_animal(row: AnimalRow) -> Result<Animal, RepositoryError> {
    let AnimalRow {
        id,
        name,
        species,
        breed,
        age,
        size,
        location,
        description,
        created_at,
        updated_at,
    } = row;

    let id = ResourceId::new(id)
        .ok_or_else(|| RepositoryError::query(format!("stored animal id {id} is not positive")))?;
    let size = size
        .map(|raw| raw.parse::<AnimalSize>())
        .transpose()
        .map_err(|err| RepositoryError::query(err.to_string()))?;

    Ok(Animal {
        id,
        name,
        species,
        breed,
        age,
        size,
        location,
        description,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl AnimalRepository for DieselAnimalRepository {
    async fn create(&self, draft: &AnimalDraft) -> Result<Animal, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewAnimalRow {
            name: &draft.name,
            species: &draft.species,
            breed: draft.breed.as_deref(),
            age: draft.age,
            size: draft.size.map(AnimalSize::as_str),
            location: draft.location.as_deref(),
            description: draft.description.as_deref(),
        };

        let row = diesel::insert_into(animals::table)
            .values(&new_row)
            .returning(AnimalRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_animal(row)
    }

    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Animal>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        animals::table
            .find(id.get())
            .select(AnimalRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_animal)
            .transpose()
    }

    async fn list(
        &self,
        filters: &AnimalFilters,
        page: PageRequest,
    ) -> Result<ListPage<Animal>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (limit, offset) = window(page);

        let total: i64 = filtered(filters)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<AnimalRow> = filtered(filters)
            .order((animals::created_at.desc(), animals::id.desc()))
            .limit(limit)
            .offset(offset)
            .select(AnimalRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(row_to_animal)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ListPage::new(items, row_count(total)))
    }

    async fn update(
        &self,
        id: ResourceId,
        changes: &AnimalChanges,
    ) -> Result<Option<Animal>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let update = AnimalUpdate {
            name: changes.name.as_deref(),
            species: changes.species.as_deref(),
            breed: changes.breed.as_deref(),
            age: changes.age,
            size: changes.size.map(AnimalSize::as_str),
            location: changes.location.as_deref(),
            description: changes.description.as_deref(),
        };

        diesel::update(animals::table.find(id.get()))
            .set((update, animals::updated_at.eq(diesel::dsl::now)))
            .returning(AnimalRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_animal)
            .transpose()
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(animals::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
