//! Linear algebra utilities.
//!
//! This module provides the dense linear-system solve backing the
//! normal-equations regression fits.

use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};

/// Solves a dense linear system `Ax = b` by LU decomposition.
///
/// # Arguments
///
/// * `a` - Square coefficient matrix
/// * `b` - Right-hand-side vector, one entry per row of `a`
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if `a` is not square or `b` has the
///   wrong length
/// - [`MathError::SingularSystem`] if `a` is singular or so
///   ill-conditioned that the solve produces non-finite values
///
/// # Example
///
/// ```rust
/// use flumen_math::linear_algebra::solve_dense;
/// use nalgebra::{DMatrix, DVector};
///
/// let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
/// let b = DVector::from_vec(vec![5.0, 5.0]);
///
/// let x = solve_dense(&a, &b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    if a.nrows() != a.ncols() {
        return Err(MathError::invalid_input(format!(
            "matrix must be square, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }
    if a.nrows() != b.len() {
        return Err(MathError::invalid_input(format!(
            "right-hand side has {} entries for a {}x{} matrix",
            b.len(),
            a.nrows(),
            a.ncols()
        )));
    }

    let solution = a
        .clone()
        .lu()
        .solve(b)
        .ok_or(MathError::SingularSystem)?;

    // A nearly singular matrix can survive the decomposition and still
    // blow up the back-substitution
    if solution.iter().any(|v| !v.is_finite()) {
        return Err(MathError::SingularSystem);
    }

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_2x2() {
        let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_vec(vec![5.0, 5.0]);

        let x = solve_dense(&a, &b).unwrap();

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_3x3() {
        let a = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 4.0, 3.0, 3.0, 8.0, 7.0, 9.0]);
        let x_expected = DVector::from_vec(vec![1.0, -2.0, 3.0]);
        let b = &a * &x_expected;

        let x = solve_dense(&a, &b).unwrap();

        for i in 0..3 {
            assert_relative_eq!(x[i], x_expected[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_singular_matrix_fails() {
        // Second row is twice the first
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);

        let result = solve_dense(&a, &b);

        assert!(matches!(result, Err(MathError::SingularSystem)));
    }

    #[test]
    fn test_non_square_fails() {
        let a = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);

        let result = solve_dense(&a, &b);

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_dimension_mismatch_fails() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0]);

        let result = solve_dense(&a, &b);

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }
}
