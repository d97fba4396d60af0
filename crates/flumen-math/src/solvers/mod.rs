//! Root-finding algorithms.
//!
//! This module provides numerical solvers for finding roots of scalar
//! equations:
//!
//! - [`secant`]: Derivative-free method using finite differences
//! - [`bisection`]: Fixed-step bracket narrowing
//! - [`bisection_checked`]: Bracket narrowing with a sign-change check
//!   at entry
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Secant | Fast (superlinear) | May diverge | Two guesses |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! The secant method converges superlinearly (order ~1.618) when it
//! converges at all; bisection halves the bracket every step, so after
//! `k` steps the bracket width is exactly `(b - a) / 2^k`.
//!
//! # Example: Normal Depth
//!
//! ```rust
//! use flumen_math::solvers::{secant, SolverConfig};
//!
//! // Manning's equation residual for a wide rectangular channel:
//! // Q - (1/n) * A * R^(2/3) * sqrt(So), with Q=10, n=0.03, So=1e-5, B=10
//! let residual = |y: f64| {
//!     let area = 10.0 * y;
//!     let radius = area / (10.0 + 2.0 * y);
//!     10.0 - area * radius.powf(2.0 / 3.0) * 1e-5_f64.sqrt() / 0.03
//! };
//!
//! let config = SolverConfig::default().with_tolerance(1e-3);
//! let result = secant(residual, 1.0, 0.9, &config).unwrap();
//! assert!(result.root > 0.0);
//! assert!(result.residual.abs() <= 1e-3);
//! ```

mod bisection;
mod secant;

pub use bisection::{bisect, bisection, bisection_checked, Bracket, Sign};
pub use secant::secant;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_secant_and_bisection_agree() {
        // Both solvers should locate sqrt(3) for x^2 - 3 on [1, 2]
        let f = |x: f64| x * x - 3.0;

        let secant_result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
        let bracket = bisection(f, 1.0, 2.0, 50);

        assert_relative_eq!(secant_result.root, 3.0_f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(bracket.midpoint(), 3.0_f64.sqrt(), epsilon = 1e-9);
    }
}
