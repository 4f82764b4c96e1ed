//! Error type for the summation crate.

use thiserror::Error;

/// Failures raised while constructing inputs or computing a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummationError {
    /// The input was below zero.
    #[error("expected a non-negative integer, received: {value}")]
    Negative {
        /// The rejected input.
        value: i64,
    },

    /// The recursive strategy was asked to descend further than allowed.
    #[error("recursive descent is limited to n <= {max}, received: {input}")]
    RecursionTooDeep {
        /// The rejected input.
        input: u64,
        /// Largest input the recursive strategy accepts.
        max: u64,
    },

    /// The sum does not fit in a `u64`.
    #[error("the sum of 1..={input} does not fit in 64 bits")]
    Overflow {
        /// The input whose sum overflowed.
        input: u64,
    },
}
