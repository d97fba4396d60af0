//! Error types for hydraulic calculations.

use flumen_math::MathError;
use thiserror::Error;

/// A specialized Result type for hydraulic calculations.
pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

/// Errors that can occur during hydraulic calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    /// Channel geometry parameter out of range.
    #[error("Invalid channel geometry: {reason}")]
    InvalidGeometry {
        /// Which parameter is invalid and why.
        reason: String,
    },

    /// Target discharge is not physically meaningful.
    #[error("Invalid discharge: {value} m^3/s (must be positive)")]
    InvalidDischarge {
        /// The rejected discharge value.
        value: f64,
    },

    /// The underlying root-finding solve failed.
    #[error(transparent)]
    Solver(#[from] MathError),
}

impl HydraulicsError {
    /// Creates an invalid geometry error.
    #[must_use]
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}
