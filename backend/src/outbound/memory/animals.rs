//! In-memory `AnimalRepository`.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::PageRequest;
use tokio::sync::RwLock;

use crate::domain::ports::{AnimalRepository, ListPage, RepositoryError};
use crate::domain::{Animal, AnimalChanges, AnimalDraft, AnimalFilters, ResourceId};

use super::{Table, paginate};

/// Animal store held in process memory.
pub struct InMemoryAnimalRepository {
    table: RwLock<Table<Animal>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryAnimalRepository {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            clock,
        }
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn create(&self, draft: &AnimalDraft) -> Result<Animal, RepositoryError> {
        let mut table = self.table.write().await;
        let id = table.allocate_id()?;
        let now = self.clock.utc();
        let animal = Animal {
            id,
            name: draft.name.clone(),
            species: draft.species.clone(),
            breed: draft.breed.clone(),
            age: draft.age,
            size: draft.size,
            location: draft.location.clone(),
            description: draft.description.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, animal.clone());
        Ok(animal)
    }

    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Animal>, RepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(
        &self,
        filters: &AnimalFilters,
        page: PageRequest,
    ) -> Result<ListPage<Animal>, RepositoryError> {
        let table = self.table.read().await;
        let mut matching: Vec<Animal> = table
            .rows
            .values()
            .filter(|animal| filters.matches(animal))
            .cloned()
            .collect();
        matching.sort_by_key(|animal| Reverse((animal.created_at, animal.id)));
        Ok(paginate(matching, page))
    }

    async fn update(
        &self,
        id: ResourceId,
        changes: &AnimalChanges,
    ) -> Result<Option<Animal>, RepositoryError> {
        let mut table = self.table.write().await;
        let Some(animal) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(animal);
        animal.updated_at = self.clock.utc();
        Ok(Some(animal.clone()))
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnimalSize;
    use crate::test_support::MutableClock;
    use rstest::{fixture, rstest};

    fn draft(name: &str, species: &str) -> AnimalDraft {
        AnimalDraft {
            name: name.to_owned(),
            species: species.to_owned(),
            breed: None,
            age: None,
            size: None,
            location: None,
            description: None,
        }
    }

    #[fixture]
    fn clock() -> Arc<MutableClock> {
        Arc::new(MutableClock::fixed())
    }

    #[rstest]
    #[tokio::test]
    async fn create_then_find_round_trips(clock: Arc<MutableClock>) {
        let repo = InMemoryAnimalRepository::new(clock.clone());
        let created = repo.create(&draft("Rex", "Dog")).await.expect("create");

        let fetched = repo.find_by_id(created.id).await.expect("find");

        assert_eq!(fetched, Some(created.clone()));
        assert_eq!(created.id.get(), 1);
        assert_eq!(created.created_at, clock.utc());
    }

    #[rstest]
    #[tokio::test]
    async fn list_orders_newest_first_and_counts_all_matches(clock: Arc<MutableClock>) {
        let repo = InMemoryAnimalRepository::new(clock.clone());
        repo.create(&draft("Rex", "Dog")).await.expect("create");
        clock.advance_seconds(1);
        repo.create(&draft("Tom", "Cat")).await.expect("create");
        clock.advance_seconds(1);
        repo.create(&draft("Fido", "Dog")).await.expect("create");

        let filters = AnimalFilters {
            species: Some("Dog".to_owned()),
            ..AnimalFilters::default()
        };
        let page = repo
            .list(&filters, PageRequest::new(1, 0))
            .await
            .expect("list");

        assert_eq!(page.total, 2);
        let names: Vec<_> = page.items.iter().map(|animal| animal.name.as_str()).collect();
        assert_eq!(names, ["Fido"]);
    }

    #[rstest]
    #[tokio::test]
    async fn same_instant_ties_break_on_id_descending(clock: Arc<MutableClock>) {
        let repo = InMemoryAnimalRepository::new(clock);
        repo.create(&draft("A", "Dog")).await.expect("create");
        repo.create(&draft("B", "Dog")).await.expect("create");

        let page = repo
            .list(&AnimalFilters::default(), PageRequest::default())
            .await
            .expect("list");

        let ids: Vec<_> = page.items.iter().map(|animal| animal.id.get()).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_touches_updated_at_only_when_found(clock: Arc<MutableClock>) {
        let repo = InMemoryAnimalRepository::new(clock.clone());
        let created = repo.create(&draft("Rex", "Dog")).await.expect("create");
        clock.advance_seconds(30);

        let changes = AnimalChanges {
            size: Some(AnimalSize::Medium),
            ..AnimalChanges::default()
        };
        let updated = repo
            .update(created.id, &changes)
            .await
            .expect("update")
            .expect("animal exists");

        assert_eq!(updated.size, Some(AnimalSize::Medium));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let missing = ResourceId::new(99).expect("positive id");
        assert_eq!(repo.update(missing, &changes).await.expect("update"), None);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed(clock: Arc<MutableClock>) {
        let repo = InMemoryAnimalRepository::new(clock);
        let created = repo.create(&draft("Rex", "Dog")).await.expect("create");

        assert!(repo.delete(created.id).await.expect("first delete"));
        assert!(!repo.delete(created.id).await.expect("second delete"));
        assert_eq!(repo.find_by_id(created.id).await.expect("find"), None);
    }
}
