//! Integration tests for the Diesel repositories against a live PostgreSQL.
//!
//! Set `SHELTER_TEST_DATABASE_URL` to a disposable database to run them; the
//! tests truncate both tables. Without it every test prints a skip marker and
//! returns.

use std::sync::Mutex;

use diesel::{Connection, PgConnection, RunQueryDsl as _};
use pagination::PageRequest;
use rstest::rstest;
use serde_json::json;
use shelter::domain::ports::{AnimalRepository, MemberRepository, RepositoryError};
use shelter::domain::{
    AnimalChanges, AnimalDraft, AnimalFilters, MemberChanges, MemberDraft, MemberFilters,
    ResourceId,
};
use shelter::outbound::persistence::{
    DbPool, DieselAnimalRepository, DieselMemberRepository, PoolConfig, run_pending_migrations,
};

const DATABASE_URL_VAR: &str = "SHELTER_TEST_DATABASE_URL";

// Both tests truncate the same tables.
static DATABASE: Mutex<()> = Mutex::new(());

fn database_url() -> Option<String> {
    let url = std::env::var(DATABASE_URL_VAR).ok().filter(|url| !url.is_empty());
    if url.is_none() {
        eprintln!("SKIP-TEST-DATABASE: {DATABASE_URL_VAR} is not set");
    }
    url
}

async fn fresh_pool(url: &str) -> DbPool {
    run_pending_migrations(url).await.expect("migrations apply");
    let mut conn = PgConnection::establish(url).expect("connect for truncate");
    diesel::sql_query("TRUNCATE animals, members RESTART IDENTITY")
        .execute(&mut conn)
        .expect("truncate tables");
    DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("pool builds")
}

fn animal(name: &str, species: &str) -> AnimalDraft {
    AnimalDraft::from_json(&json!({ "name": name, "species": species, "size": "small" }))
        .expect("valid draft")
}

#[rstest]
#[tokio::test]
async fn animals_round_trip_through_postgres() {
    let Some(url) = database_url() else {
        return;
    };
    let _guard = DATABASE.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let repo = DieselAnimalRepository::new(fresh_pool(&url).await);

    let rex = repo.create(&animal("Rex", "Dog")).await.expect("create rex");
    let luna = repo.create(&animal("Luna", "Cat")).await.expect("create luna");
    repo.create(&animal("Bo", "Dog")).await.expect("create bo");
    assert_eq!(rex.id.get(), 1);
    assert_eq!(rex.created_at, rex.updated_at);

    let dogs = AnimalFilters {
        species: Some("Dog".to_owned()),
        ..AnimalFilters::default()
    };
    let page = repo
        .list(&dogs, PageRequest::new(1, 0))
        .await
        .expect("list dogs");
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Bo");

    let changes = AnimalChanges::from_json(&json!({ "age": 3 })).expect("valid changes");
    let updated = repo
        .update(luna.id, &changes)
        .await
        .expect("update")
        .expect("luna exists");
    assert_eq!(updated.age, Some(3));
    assert_eq!(updated.name, "Luna");
    assert!(updated.updated_at >= luna.updated_at);

    let missing = ResourceId::new(999).expect("positive id");
    assert!(repo.update(missing, &changes).await.expect("update").is_none());
    assert!(repo.delete(rex.id).await.expect("delete"));
    assert!(!repo.delete(rex.id).await.expect("second delete"));
    assert!(repo.find_by_id(rex.id).await.expect("find").is_none());
}

#[rstest]
#[tokio::test]
async fn member_emails_stay_unique() {
    let Some(url) = database_url() else {
        return;
    };
    let _guard = DATABASE.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let repo = DieselMemberRepository::new(fresh_pool(&url).await);

    let draft = MemberDraft::from_json(&json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.org",
    }))
    .expect("valid draft");
    repo.create(&draft).await.expect("first create");
    let second = repo.create(&draft).await.expect_err("duplicate email");
    assert_eq!(second, RepositoryError::conflict("email"));

    let filters = MemberFilters {
        full_name: Some("LOVE".to_owned()),
        ..MemberFilters::default()
    };
    let page = repo
        .list(&filters, PageRequest::default())
        .await
        .expect("list");
    assert_eq!(page.total, 1);

    let wildcard = MemberFilters {
        email: Some("%".to_owned()),
        ..MemberFilters::default()
    };
    let page = repo
        .list(&wildcard, PageRequest::default())
        .await
        .expect("list");
    assert_eq!(page.total, 0);

    let changes =
        MemberChanges::from_json(&json!({ "fullName": "Augusta Ada King" })).expect("valid");
    let updated = repo
        .update(ResourceId::new(1).expect("id"), &changes)
        .await
        .expect("update")
        .expect("member exists");
    assert_eq!(updated.full_name, "Augusta Ada King");
    assert_eq!(updated.email, "ada@example.org");
}
