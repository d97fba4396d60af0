//! Least-squares curve fitting.
//!
//! This module provides closed-form regression over paired samples:
//!
//! - [`linear_fit`]: Simple linear regression `y = a0 + a1*x` with a
//!   coefficient of determination
//! - [`polynomial_fit`]: Degree-m polynomial least squares via the
//!   normal equations
//!
//! Both fits are pure functions over two equal-length sample slices;
//! inputs are never mutated and no I/O is performed.
//!
//! # Example
//!
//! ```rust
//! use flumen_math::regression::{linear_fit, polynomial_fit};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [1.0, 3.0, 5.0, 7.0];
//!
//! let fit = linear_fit(&x, &y).unwrap();
//! assert!((fit.intercept - 1.0).abs() < 1e-12);
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.r_squared - 1.0).abs() < 1e-12);
//!
//! // A degree-1 polynomial fit recovers the same line
//! let coefficients = polynomial_fit(&x, &y, 1).unwrap();
//! assert!((coefficients[0] - 1.0).abs() < 1e-9);
//! assert!((coefficients[1] - 2.0).abs() < 1e-9);
//! ```

mod linear;
mod polynomial;

pub use linear::{linear_fit, LinearFit};
pub use polynomial::polynomial_fit;

use crate::error::{MathError, MathResult};

/// Checks that the sample vectors are paired.
pub(crate) fn validate_sample_set(x: &[f64], y: &[f64]) -> MathResult<()> {
    if x.len() != y.len() {
        return Err(MathError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}
