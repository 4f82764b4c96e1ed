//! Shelter API library: domain model, ports, adapters and middleware.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(test)]
pub mod test_support;

pub use middleware::{Timeout, Trace};
pub use settings::ServerSettings;
