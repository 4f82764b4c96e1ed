//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between the internal row structs
//! (`models.rs`, `schema.rs`) and domain types. Connections come from a
//! shared `bb8` pool of `diesel-async` connections, and every driver failure
//! is mapped to [`RepositoryError`](crate::domain::ports::RepositoryError)
//! before it leaves this module.
//!
//! # Example
//!
//! ```no_run
//! use shelter::outbound::persistence::{DbPool, DieselAnimalRepository, PoolConfig};
//!
//! # async fn demo() -> Result<(), shelter::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/shelter")).await?;
//! let animals = DieselAnimalRepository::new(pool);
//! # drop(animals);
//! # Ok(())
//! # }
//! ```

mod diesel_animal_repository;
mod diesel_error_mapping;
mod diesel_member_repository;
mod migrations;
mod models;
mod pool;
mod query_bounds;
mod schema;

pub use diesel_animal_repository::DieselAnimalRepository;
pub use diesel_member_repository::DieselMemberRepository;
pub use migrations::{MIGRATIONS, run_pending_migrations};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
