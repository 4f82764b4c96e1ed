//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{AnimalRepository, MemberRepository};
use crate::inbound::http::configure;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::memory::{InMemoryAnimalRepository, InMemoryMemberRepository};
use crate::test_support::MutableClock;

/// State backed by empty in-memory repositories and a frozen clock.
pub fn in_memory_state() -> HttpState {
    let clock = Arc::new(MutableClock::fixed());
    HttpState::new(
        Arc::new(InMemoryAnimalRepository::new(clock.clone())),
        Arc::new(InMemoryMemberRepository::new(clock.clone())),
        clock,
    )
}

/// State with the given animal port and an in-memory member store.
pub fn state_with_animals(animals: impl AnimalRepository + 'static) -> HttpState {
    HttpState {
        animals: Arc::new(animals),
        ..in_memory_state()
    }
}

/// State with the given member port and an in-memory animal store.
pub fn state_with_members(members: impl MemberRepository + 'static) -> HttpState {
    HttpState {
        members: Arc::new(members),
        ..in_memory_state()
    }
}

/// Application wired like production, minus the timeout.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(health))
        .wrap(Trace)
        .configure(configure)
}
