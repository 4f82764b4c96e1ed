//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use actix_web::{HttpRequest, web};
use mockable::Clock;

use crate::domain::Error;
use crate::domain::ports::{AnimalRepository, MemberRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Animal persistence port.
    pub animals: Arc<dyn AnimalRepository>,
    /// Member persistence port.
    pub members: Arc<dyn MemberRepository>,
    /// Source of envelope timestamps.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Bundle the ports handlers need.
    pub fn new(
        animals: Arc<dyn AnimalRepository>,
        members: Arc<dyn MemberRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            animals,
            members,
            clock,
        }
    }

    /// Tie `error` to the request: its path and the clock's current time.
    pub fn reject(&self, req: &HttpRequest, error: Error) -> Error {
        error
            .with_path(req.path())
            .with_occurred_at(self.clock.utc())
    }

    /// [`reject`](Self::reject) for code without the handler's state in hand.
    ///
    /// Falls back to recording only the path when no state is registered.
    pub fn reject_request(req: &HttpRequest, error: Error) -> Error {
        match req.app_data::<web::Data<Self>>() {
            Some(state) => state.reject(req, error),
            None => error.with_path(req.path()),
        }
    }
}
