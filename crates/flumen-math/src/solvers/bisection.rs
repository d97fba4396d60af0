//! Bisection bracket narrowing.

use crate::error::{MathError, MathResult};

/// Sign class of a function value.
///
/// Exact zero is its own class: a function value of zero at an
/// endpoint compares equal only to another exact zero, so the
/// bisection step never mistakes a root sitting on an endpoint for a
/// sign agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Strictly negative value.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly positive value.
    Positive,
}

impl Sign {
    /// Classifies a function value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }
}

/// A bracketing interval produced by bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower endpoint.
    pub lower: f64,
    /// Upper endpoint.
    pub upper: f64,
}

impl Bracket {
    /// Width of the bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the bracket, the usual root approximation.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.lower + (self.upper - self.lower) / 2.0
    }
}

/// Performs one bisection step on `[a, b]`.
///
/// Evaluates `f` at the midpoint `p = a + (b - a)/2` and keeps the
/// half whose endpoints disagree in sign class: if `f(a)` and `f(p)`
/// share a sign the root lies in `[p, b]`, otherwise in `[a, p]`.
pub fn bisect<F>(f: F, a: f64, b: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let p = a + (b - a) / 2.0;
    if Sign::of(f(a)) == Sign::of(f(p)) {
        (p, b)
    } else {
        (a, p)
    }
}

/// Bisection bracket narrowing for a fixed number of steps.
///
/// Runs exactly `steps` halvings with no early exit, so the returned
/// bracket has width `(b - a) / 2^steps`. The caller derives an
/// approximate root from [`Bracket::midpoint`] or either endpoint.
///
/// The sign-change precondition `sign(f(a)) != sign(f(b))` is NOT
/// validated here; without it the narrowed interval is meaningless.
/// Use [`bisection_checked`] to have the precondition enforced.
///
/// # Example
///
/// ```rust
/// use flumen_math::solvers::bisection;
///
/// // Narrow [1, 2] onto sqrt(3) for f(x) = x^2 - 3
/// let bracket = bisection(|x| x * x - 3.0, 1.0, 2.0, 20);
///
/// assert!((bracket.midpoint() - 3.0_f64.sqrt()).abs() < 1e-5);
/// assert!((bracket.width() - 1.0 / 2.0_f64.powi(20)).abs() < 1e-15);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, steps: u32) -> Bracket
where
    F: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = (a, b);
    for step in 0..steps {
        (lo, hi) = bisect(&f, lo, hi);
        log::trace!("bisection step {}: bracket [{lo}, {hi}]", step + 1);
    }
    Bracket {
        lower: lo,
        upper: hi,
    }
}

/// Bisection narrowing with the bracket precondition enforced.
///
/// Identical to [`bisection`] once running, but evaluates `f` at both
/// endpoints first and rejects brackets whose endpoints fall in the
/// same sign class. An endpoint where `f` is exactly zero always
/// passes the check (zero is its own sign class).
///
/// # Errors
///
/// Returns [`MathError::InvalidBracket`] when `f(a)` and `f(b)` have
/// the same sign.
pub fn bisection_checked<F>(f: F, a: f64, b: f64, steps: u32) -> MathResult<Bracket>
where
    F: Fn(f64) -> f64,
{
    let fa = f(a);
    let fb = f(b);
    if Sign::of(fa) == Sign::of(fb) {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }
    Ok(bisection(f, a, b, steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sign_classes() {
        assert_eq!(Sign::of(2.5), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
        assert_ne!(Sign::of(0.0), Sign::of(1.0));
    }

    #[test]
    fn test_single_step() {
        let f = |x: f64| x * x - 3.0;

        // f(1) < 0 and f(1.5) < 0 share a sign, so the root is in [1.5, 2]
        let (a, b) = bisect(f, 1.0, 2.0);

        assert_relative_eq!(a, 1.5);
        assert_relative_eq!(b, 2.0);
    }

    #[test]
    fn test_width_halves_each_step() {
        let f = |x: f64| x * x - 3.0;

        for steps in 0..12 {
            let bracket = bisection(f, 1.0, 2.0, steps);
            assert_relative_eq!(bracket.width(), 1.0 / 2.0_f64.powi(steps as i32));
            // Root stays inside the bracket
            assert!(bracket.lower <= 3.0_f64.sqrt());
            assert!(bracket.upper >= 3.0_f64.sqrt());
        }
    }

    #[test]
    fn test_converges_to_sqrt_3() {
        let f = |x: f64| x * x - 3.0;

        let bracket = bisection(f, 1.0, 2.0, 40);

        assert_relative_eq!(bracket.midpoint(), 1.7320508, epsilon = 1e-7);
    }

    #[test]
    fn test_zero_steps_returns_input() {
        let f = |x: f64| x * x - 3.0;

        let bracket = bisection(f, 1.0, 2.0, 0);

        assert_relative_eq!(bracket.lower, 1.0);
        assert_relative_eq!(bracket.upper, 2.0);
    }

    #[test]
    fn test_no_early_exit_on_exact_root() {
        // Midpoint of [0, 2] hits the root exactly; narrowing continues
        // for all requested steps regardless
        let f = |x: f64| x - 1.0;

        let bracket = bisection(f, 0.0, 2.0, 10);

        assert_relative_eq!(bracket.width(), 2.0 / 1024.0);
        assert!(bracket.lower <= 1.0 && 1.0 <= bracket.upper);
    }

    #[test]
    fn test_checked_accepts_sign_change() {
        let f = |x: f64| x * x - 3.0;

        let bracket = bisection_checked(f, 1.0, 2.0, 20).unwrap();

        assert_relative_eq!(bracket.midpoint(), 3.0_f64.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_checked_rejects_same_sign() {
        let f = |x: f64| x * x - 3.0;

        // f(2) and f(3) are both positive
        let result = bisection_checked(f, 2.0, 3.0, 20);

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_checked_accepts_zero_endpoint() {
        // f(1) = 0 is its own sign class, distinct from f(2) > 0
        let f = |x: f64| x - 1.0;

        let result = bisection_checked(f, 1.0, 2.0, 5);

        assert!(result.is_ok());
    }

    #[test]
    fn test_negative_root() {
        let f = |x: f64| x + 1.0;

        let bracket = bisection(f, -2.0, 0.0, 30);

        assert_relative_eq!(bracket.midpoint(), -1.0, epsilon = 1e-8);
    }
}
