//! Secant root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm.
///
/// Similar to Newton-Raphson but approximates the derivative by the
/// slope between the two most recent iterates. Does not require an
/// analytical derivative or a bracketing interval.
///
/// Convergence rate is superlinear (order ~1.618, the golden ratio).
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `y0` - First initial guess
/// * `y1` - Second initial guess (must differ from `y0`)
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics. The iteration count is the
/// number of secant steps actually taken, which is zero when `y1`
/// already satisfies the tolerance.
///
/// # Errors
///
/// - [`MathError::DegenerateStep`] if the two current iterates
///   coincide or the secant line between them is horizontal
/// - [`MathError::NotConverged`] if the iteration cap is reached; the
///   error carries the last estimate and residual so the caller can
///   retry with different seeds or report
///
/// # Example
///
/// ```rust
/// use flumen_math::solvers::{secant, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, y0: f64, y1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut y_prev = y0;
    let mut y_curr = y1;
    let mut f_prev = f(y_prev);
    let mut f_curr = f(y_curr);

    let mut iterations = 0;
    while f_curr.abs() > config.tolerance {
        if iterations >= config.max_iterations {
            log::debug!(
                "secant stopped at cap: estimate {y_curr}, residual {f_curr:.2e}"
            );
            return Err(MathError::not_converged(y_curr, iterations, f_curr));
        }

        // Exactly coincident iterates leave the slope undefined
        if y_curr == y_prev {
            return Err(MathError::DegenerateStep { estimate: y_curr });
        }

        let slope = (f_curr - f_prev) / (y_curr - y_prev);
        if slope == 0.0 {
            return Err(MathError::DegenerateStep { estimate: y_curr });
        }

        let y_next = y_curr - f_curr / slope;

        // Shift the two-point window forward
        y_prev = y_curr;
        f_prev = f_curr;
        y_curr = y_next;
        f_curr = f(y_curr);
        iterations += 1;

        log::trace!("secant iteration {iterations}: estimate {y_curr}, residual {f_curr:.2e}");
    }

    Ok(SolverResult {
        root: y_curr,
        iterations,
        residual: f_curr,
    })
}
