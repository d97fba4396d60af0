//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Secant step is undefined: the two current iterates coincide or
    /// the secant line through them is horizontal.
    #[error("Degenerate secant step at estimate {estimate}: slope is undefined")]
    DegenerateStep {
        /// Estimate at which the step broke down.
        estimate: f64,
    },

    /// Root-finding algorithm exhausted its iteration cap.
    #[error(
        "Not converged after {iterations} iterations (last estimate: {last_estimate}, residual: {residual:.2e})"
    )]
    NotConverged {
        /// Best estimate when iteration stopped.
        last_estimate: f64,
        /// Number of iterations attempted.
        iterations: u32,
        /// Residual at the last estimate.
        residual: f64,
    },

    /// Sample vectors have different lengths.
    #[error("Length mismatch: x has {x_len} samples but y has {y_len}")]
    LengthMismatch {
        /// Length of the x vector.
        x_len: usize,
        /// Length of the y vector.
        y_len: usize,
    },

    /// Too few samples for the requested polynomial degree.
    #[error("Underdetermined system: {samples} samples cannot fit a polynomial needing {required}")]
    UnderdeterminedSystem {
        /// Number of samples provided.
        samples: usize,
        /// Minimum number of samples required (degree + 1).
        required: usize,
    },

    /// Normal-equations matrix is singular (not invertible).
    #[error("Singular system: normal-equations matrix cannot be inverted")]
    SingularSystem,

    /// Regression input admits no well-defined fit.
    #[error("Degenerate input: {reason}")]
    DegenerateInput {
        /// Why the input is degenerate.
        reason: String,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a not-converged error.
    #[must_use]
    pub fn not_converged(last_estimate: f64, iterations: u32, residual: f64) -> Self {
        Self::NotConverged {
            last_estimate,
            iterations,
            residual,
        }
    }

    /// Creates a degenerate input error.
    #[must_use]
    pub fn degenerate_input(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
