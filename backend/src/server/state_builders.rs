//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use shelter::domain::ports::{AnimalRepository, MemberRepository};
use shelter::inbound::http::state::HttpState;
use shelter::outbound::memory::{InMemoryAnimalRepository, InMemoryMemberRepository};
use shelter::outbound::persistence::{DbPool, DieselAnimalRepository, DieselMemberRepository};

use super::ServerConfig;

type Repositories = (Arc<dyn AnimalRepository>, Arc<dyn MemberRepository>);

fn build_repositories(pool: Option<&DbPool>, clock: &Arc<dyn Clock>) -> Repositories {
    match pool {
        Some(pool) => (
            Arc::new(DieselAnimalRepository::new(pool.clone())),
            Arc::new(DieselMemberRepository::new(pool.clone())),
        ),
        None => {
            info!("no database configured; records are kept in memory");
            (
                Arc::new(InMemoryAnimalRepository::new(clock.clone())),
                Arc::new(InMemoryMemberRepository::new(clock.clone())),
            )
        }
    }
}

/// Build the shared HTTP state, preferring Diesel adapters when the
/// configuration carries a pool.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let (animals, members) = build_repositories(config.db_pool.as_ref(), &clock);
    web::Data::new(HttpState::new(animals, members, clock))
}
