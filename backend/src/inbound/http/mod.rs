//! HTTP inbound adapter exposing REST endpoints.
//!
//! [`configure`] registers every route, the extractor settings and the
//! catch-all 404 on an Actix application. Callers supply
//! `web::Data<HttpState>` and `web::Data<HealthState>` as app data.

pub mod animals;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod health;
pub mod members;
pub mod root;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register routes and extractor configuration.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::{App, web};
/// use mockable::DefaultClock;
/// use shelter::inbound::http::{configure, health::HealthState, state::HttpState};
/// use shelter::outbound::memory::{InMemoryAnimalRepository, InMemoryMemberRepository};
///
/// let clock = Arc::new(DefaultClock);
/// let state = HttpState::new(
///     Arc::new(InMemoryAnimalRepository::new(clock.clone())),
///     Arc::new(InMemoryMemberRepository::new(clock.clone())),
///     clock,
/// );
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extractors::json_config())
        .app_data(extractors::query_config())
        .service(root::banner)
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .service(animals::scope())
        .service(members::scope())
        .default_service(web::to(extractors::not_found));
}
