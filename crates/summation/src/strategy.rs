//! The three summation strategies.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{SummationError, WholeNumber};

/// Largest input [`Strategy::RecursiveDescent`] accepts before refusing to
/// grow the call stack any further.
pub const MAX_RECURSION_INPUT: u64 = 5_000;

/// Outcome of running one strategy on one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummationResult {
    /// Kebab-case strategy name, e.g. `gauss-closed-form`.
    pub method: &'static str,
    /// The `n` that was summed up to.
    pub input: WholeNumber,
    /// `1 + 2 + ... + n`.
    pub output: u64,
    /// Asymptotic running time.
    pub time_complexity: &'static str,
    /// Asymptotic auxiliary space.
    pub space_complexity: &'static str,
}

/// A way of computing `1 + 2 + ... + n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Accumulate in a loop. O(n) time, O(1) space.
    IterativeLoop,
    /// Recurse from `n` down to zero. O(n) time, O(n) space.
    RecursiveDescent,
    /// Evaluate `n * (n + 1) / 2`. O(1) time and space.
    GaussClosedForm,
}

impl Strategy {
    /// Every strategy, in presentation order.
    pub const ALL: [Self; 3] = [
        Self::IterativeLoop,
        Self::RecursiveDescent,
        Self::GaussClosedForm,
    ];

    /// Kebab-case name used in reports and on the command line.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::IterativeLoop => "iterative-loop",
            Self::RecursiveDescent => "recursive-descent",
            Self::GaussClosedForm => "gauss-closed-form",
        }
    }

    /// Asymptotic running time.
    #[must_use]
    pub const fn time_complexity(self) -> &'static str {
        match self {
            Self::IterativeLoop | Self::RecursiveDescent => "O(n)",
            Self::GaussClosedForm => "O(1)",
        }
    }

    /// Asymptotic auxiliary space.
    #[must_use]
    pub const fn space_complexity(self) -> &'static str {
        match self {
            Self::IterativeLoop | Self::GaussClosedForm => "O(1)",
            Self::RecursiveDescent => "O(n)",
        }
    }

    /// Sum the integers `1..=n` using this strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SummationError::Overflow`] when the sum exceeds `u64::MAX`
    /// and [`SummationError::RecursionTooDeep`] when the recursive strategy
    /// is given an input above [`MAX_RECURSION_INPUT`].
    ///
    /// # Examples
    /// ```
    /// use summation::{Strategy, WholeNumber};
    ///
    /// let result = Strategy::GaussClosedForm
    ///     .run(WholeNumber::new(10))
    ///     .expect("small input");
    /// assert_eq!(result.output, 55);
    /// assert_eq!(result.method, "gauss-closed-form");
    /// ```
    pub fn run(self, n: WholeNumber) -> Result<SummationResult, SummationError> {
        let output = match self {
            Self::IterativeLoop => sum_iteratively(n)?,
            Self::RecursiveDescent => sum_recursively(n)?,
            Self::GaussClosedForm => sum_by_formula(n)?,
        };
        Ok(SummationResult {
            method: self.method(),
            input: n,
            output,
            time_complexity: self.time_complexity(),
            space_complexity: self.space_complexity(),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.method() == s.trim())
            .ok_or_else(|| {
                format!(
                    "unknown method '{s}', expected one of: iterative-loop, \
                     recursive-descent, gauss-closed-form"
                )
            })
    }
}

/// Sum `1..=n` with a loop accumulator.
///
/// # Errors
///
/// Returns [`SummationError::Overflow`] if the running total leaves `u64`.
pub fn sum_iteratively(n: WholeNumber) -> Result<u64, SummationError> {
    let input = n.get();
    (1..=input).try_fold(0_u64, |total, counter| {
        total
            .checked_add(counter)
            .ok_or(SummationError::Overflow { input })
    })
}

/// Sum `1..=n` by recursing towards zero.
///
/// # Errors
///
/// Returns [`SummationError::RecursionTooDeep`] for inputs above
/// [`MAX_RECURSION_INPUT`].
pub fn sum_recursively(n: WholeNumber) -> Result<u64, SummationError> {
    let input = n.get();
    if input > MAX_RECURSION_INPUT {
        return Err(SummationError::RecursionTooDeep {
            input,
            max: MAX_RECURSION_INPUT,
        });
    }
    descend(input).ok_or(SummationError::Overflow { input })
}

fn descend(n: u64) -> Option<u64> {
    match n.checked_sub(1) {
        None => Some(0),
        Some(rest) => descend(rest)?.checked_add(n),
    }
}

/// Sum `1..=n` with Gauss's closed form `n * (n + 1) / 2`.
///
/// The product is taken in 128 bits so it cannot wrap; only the final
/// narrowing can fail.
///
/// # Errors
///
/// Returns [`SummationError::Overflow`] when the sum exceeds `u64::MAX`.
pub fn sum_by_formula(n: WholeNumber) -> Result<u64, SummationError> {
    let input = n.get();
    let wide = u128::from(input);
    let doubled = wide
        .checked_mul(wide + 1)
        .ok_or(SummationError::Overflow { input })?;
    u64::try_from(doubled >> 1).map_err(|_| SummationError::Overflow { input })
}
