//! Three ways of summing the integers `1..=n`.
//!
//! Each [`Strategy`] computes the same triangular number with a different
//! complexity profile: a loop accumulator, a recursive descent and Gauss's
//! closed form. Inputs are [`WholeNumber`]s, so negative values are rejected
//! before any strategy runs.
//!
//! # Example
//!
//! ```
//! use summation::{Strategy, WholeNumber};
//!
//! let n = WholeNumber::try_from(10_i64).expect("non-negative");
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.run(n).expect("small input").output, 55);
//! }
//! ```

mod error;
mod report;
mod strategy;
mod whole_number;

pub use error::SummationError;
pub use report::{DEFAULT_INPUTS, ReportFormat, write_report};
pub use strategy::{
    MAX_RECURSION_INPUT, Strategy, SummationResult, sum_by_formula, sum_iteratively,
    sum_recursively,
};
pub use whole_number::WholeNumber;
