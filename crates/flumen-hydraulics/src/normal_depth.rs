//! Normal depth solve via the secant method.

use flumen_math::solvers::{secant, SolverConfig, SolverResult};

use crate::channel::RectangularChannel;
use crate::error::{HydraulicsError, HydraulicsResult};

/// Seed depths for the secant iteration, in metres.
///
/// The defaults (1.0 m and 0.9 m) come from the course worked example
/// and work well for mild channels of order-of-magnitude 10 m width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthGuesses {
    /// First seed depth.
    pub first: f64,
    /// Second seed depth (must differ from the first).
    pub second: f64,
}

impl Default for DepthGuesses {
    fn default() -> Self {
        Self {
            first: 1.0,
            second: 0.9,
        }
    }
}

impl DepthGuesses {
    /// Creates seed depths for the secant iteration.
    #[must_use]
    pub fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }
}

/// Solves for the normal (uniform-flow) depth of a channel.
///
/// Finds the depth `y` at which the channel's Manning capacity equals
/// the target discharge by driving the residual
/// `Q - discharge_capacity(y)` to zero with the secant method.
///
/// # Arguments
///
/// * `channel` - Channel geometry and roughness
/// * `discharge` - Target discharge `Q` in m³/s (positive)
/// * `guesses` - Two distinct seed depths for the secant iteration
/// * `config` - Solver tolerance and iteration cap
///
/// # Errors
///
/// - [`HydraulicsError::InvalidDischarge`] if `discharge` is not a
///   positive finite number
/// - [`HydraulicsError::Solver`] wrapping the underlying
///   [`MathError`](flumen_math::MathError) when the secant iteration
///   degenerates or fails to converge
///
/// # Example
///
/// ```rust
/// use flumen_hydraulics::{normal_depth, DepthGuesses, RectangularChannel};
/// use flumen_math::solvers::SolverConfig;
///
/// let channel = RectangularChannel::new(10.0, 0.03, 1e-5).unwrap();
/// let config = SolverConfig::default().with_tolerance(1e-3);
///
/// let solution = normal_depth(&channel, 10.0, DepthGuesses::default(), &config).unwrap();
///
/// let capacity = channel.discharge_capacity(solution.root);
/// assert!((capacity - 10.0).abs() <= 1e-3);
/// ```
pub fn normal_depth(
    channel: &RectangularChannel,
    discharge: f64,
    guesses: DepthGuesses,
    config: &SolverConfig,
) -> HydraulicsResult<SolverResult> {
    if !discharge.is_finite() || discharge <= 0.0 {
        return Err(HydraulicsError::InvalidDischarge { value: discharge });
    }

    let residual = |depth: f64| discharge - channel.discharge_capacity(depth);

    let solution = secant(residual, guesses.first, guesses.second, config)?;
    log::debug!(
        "normal depth {} m for discharge {discharge} m^3/s in {} iterations",
        solution.root,
        solution.iterations
    );

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use flumen_math::MathError;

    fn course_channel() -> RectangularChannel {
        RectangularChannel::new(10.0, 0.03, 1e-5).unwrap()
    }

    #[test]
    fn test_course_worked_example() {
        // Q=10 m^3/s, n=0.03, So=1e-5, B=10 m, seeds 1.0/0.9, eps=1e-3
        let channel = course_channel();
        let config = SolverConfig::default().with_tolerance(1e-3);

        let solution =
            normal_depth(&channel, 10.0, DepthGuesses::default(), &config).unwrap();

        assert!(solution.root > 0.0);
        assert!(solution.iterations < 100);
        assert!(solution.residual.abs() <= 1e-3);
    }

    #[test]
    fn test_solution_satisfies_manning() {
        let channel = course_channel();
        let config = SolverConfig::default().with_tolerance(1e-9);

        let solution =
            normal_depth(&channel, 10.0, DepthGuesses::default(), &config).unwrap();

        assert_relative_eq!(
            channel.discharge_capacity(solution.root),
            10.0,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_deeper_for_larger_discharge() {
        let channel = course_channel();
        let config = SolverConfig::default().with_tolerance(1e-6);

        let low = normal_depth(&channel, 5.0, DepthGuesses::default(), &config).unwrap();
        let high = normal_depth(&channel, 20.0, DepthGuesses::default(), &config).unwrap();

        assert!(high.root > low.root);
    }

    #[test]
    fn test_rejects_non_positive_discharge() {
        let channel = course_channel();
        let config = SolverConfig::default();

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = normal_depth(&channel, bad, DepthGuesses::default(), &config);
            assert!(matches!(
                result,
                Err(HydraulicsError::InvalidDischarge { .. })
            ));
        }
    }

    #[test]
    fn test_coincident_guesses_surface_solver_error() {
        let channel = course_channel();
        let config = SolverConfig::default().with_tolerance(1e-3);

        let result = normal_depth(&channel, 10.0, DepthGuesses::new(1.0, 1.0), &config);

        assert!(matches!(
            result,
            Err(HydraulicsError::Solver(MathError::DegenerateStep { .. }))
        ));
    }
}
