//! Simple linear regression.

use crate::error::{MathError, MathResult};
use crate::regression::validate_sample_set;

/// Result of a simple linear regression `y = a0 + a1*x`.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    /// Constant term `a0`.
    pub intercept: f64,
    /// Gradient `a1`.
    pub slope: f64,
    /// Coefficient of determination: the fraction of variance in `y`
    /// explained by the fitted line.
    pub r_squared: f64,
}

/// Fits a straight line to paired samples by least squares.
///
/// Uses the closed-form normal-equations solution:
///
/// ```text
/// a1 = (n*Σxy - Σx*Σy) / (n*Σx² - (Σx)²)
/// a0 = Σy/n - a1 * Σx/n
/// r² = ((n*Σxy - Σx*Σy) / (√(n*Σx² - (Σx)²) * √(n*Σy² - (Σy)²)))²
/// ```
///
/// # Errors
///
/// - [`MathError::LengthMismatch`] if `x` and `y` differ in length
/// - [`MathError::DegenerateInput`] if `n*Σx² - (Σx)²` is zero (all
///   `x` values identical), which leaves the slope undefined
///
/// # Example
///
/// ```rust
/// use flumen_math::regression::linear_fit;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [2.0, 4.0, 6.0];
///
/// let fit = linear_fit(&x, &y).unwrap();
/// assert!(fit.intercept.abs() < 1e-12);
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.r_squared - 1.0).abs() < 1e-12);
/// ```
pub fn linear_fit(x: &[f64], y: &[f64]) -> MathResult<LinearFit> {
    validate_sample_set(x, y)?;

    let n = x.len() as f64;

    let sx: f64 = x.iter().sum();
    let sy: f64 = y.iter().sum();
    let sx2: f64 = x.iter().map(|xi| xi * xi).sum();
    let sy2: f64 = y.iter().map(|yi| yi * yi).sum();
    let sxy: f64 = x.iter().zip(y).map(|(xi, yi)| xi * yi).sum();

    let denominator = n * sx2 - sx * sx;
    if denominator == 0.0 {
        return Err(MathError::degenerate_input(
            "all x values identical: slope is undefined",
        ));
    }

    let slope = (n * sxy - sx * sy) / denominator;
    let intercept = sy / n - slope * sx / n;
    let r_squared =
        ((n * sxy - sx * sy) / denominator.sqrt() / (n * sy2 - sy * sy).sqrt()).powi(2);

    Ok(LinearFit {
        intercept,
        slope,
        r_squared,
    })
}
