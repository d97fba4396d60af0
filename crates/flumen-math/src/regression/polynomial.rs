//! Polynomial least-squares regression.

use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};
use crate::linear_algebra::solve_dense;
use crate::regression::validate_sample_set;

/// Fits a degree-`degree` polynomial to paired samples by least squares.
///
/// Minimizing the squared residuals of
/// `y = a[0] + a[1]*x + ... + a[m]*x^m` leads to the normal equations
/// `A·a = b` with
///
/// ```text
/// A[i][j] = Σ x^(i+j)      (A[0][0] = n, the i+j = 0 case)
/// b[i]    = Σ x^i * y      (b[0] = Σy)
/// ```
///
/// The `(m+1)x(m+1)` system is solved densely; coefficients are
/// returned in ascending powers of `x`, so `a[0]` is the constant
/// term.
///
/// # Errors
///
/// - [`MathError::LengthMismatch`] if `x` and `y` differ in length
/// - [`MathError::UnderdeterminedSystem`] if fewer than `degree + 1`
///   samples are supplied
/// - [`MathError::SingularSystem`] if the normal-equations matrix is
///   not invertible (for example, repeated `x` values collapsing the
///   design space)
///
/// # Example
///
/// ```rust
/// use flumen_math::regression::polynomial_fit;
///
/// // Samples drawn exactly from y = 1 + 2x + 3x^2
/// let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
/// let y: Vec<f64> = x.iter().map(|xi| 1.0 + 2.0 * xi + 3.0 * xi * xi).collect();
///
/// let a = polynomial_fit(&x, &y, 2).unwrap();
/// assert!((a[0] - 1.0).abs() < 1e-9);
/// assert!((a[1] - 2.0).abs() < 1e-9);
/// assert!((a[2] - 3.0).abs() < 1e-9);
/// ```
pub fn polynomial_fit(x: &[f64], y: &[f64], degree: usize) -> MathResult<Vec<f64>> {
    validate_sample_set(x, y)?;

    let n = x.len();
    let unknowns = degree + 1;
    if n < unknowns {
        return Err(MathError::UnderdeterminedSystem {
            samples: n,
            required: unknowns,
        });
    }

    let (a, b) = normal_equations(x, y, degree);
    let solution = solve_dense(&a, &b)?;

    Ok(solution.iter().copied().collect())
}

/// Assembles the normal-equations matrix and right-hand side.
fn normal_equations(x: &[f64], y: &[f64], degree: usize) -> (DMatrix<f64>, DVector<f64>) {
    let size = degree + 1;
    let mut a = DMatrix::zeros(size, size);
    let mut b = DVector::zeros(size);

    for i in 0..size {
        for j in 0..size {
            let power = (i + j) as i32;
            a[(i, j)] = if power == 0 {
                x.len() as f64
            } else {
                x.iter().map(|xi| xi.powi(power)).sum()
            };
        }

        b[i] = if i == 0 {
            y.iter().sum()
        } else {
            x.iter()
                .zip(y)
                .map(|(xi, yi)| xi.powi(i as i32) * yi)
                .sum()
        };
    }

    (a, b)
}
