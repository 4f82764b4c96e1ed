//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns:
//! trace identifiers with request logging, and request timeouts.

pub mod timeout;
pub mod trace;

pub use timeout::{DEFAULT_REQUEST_TIMEOUT, Timeout};
pub use trace::Trace;
