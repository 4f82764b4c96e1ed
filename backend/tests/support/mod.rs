//! Shared harness and steps for the shelter integration suites.
//!
//! Integration tests compile as separate crates under `backend/tests/`; each
//! suite pulls this module in with `mod support;`.

pub mod harness;
pub mod steps;
