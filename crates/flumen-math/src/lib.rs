//! # Flumen Math
//!
//! Numerical utilities for the Flumen open-channel hydraulics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Root-finding algorithms (secant, bisection)
//! - **Regression**: Least-squares curve fitting (simple linear, polynomial)
//! - **Linear Algebra**: Dense linear-system solves backing the
//!   normal-equations fits
//!
//! ## Design Philosophy
//!
//! - **Typed failures**: Every degenerate case surfaces as a
//!   [`MathError`] variant, never a NaN, sentinel value, or process exit
//! - **Stateless**: Each call is an independent, synchronous computation
//!   over caller-owned data; nothing is cached or shared
//! - **Numerical Stability**: Careful handling of edge cases

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod linear_algebra;
pub mod regression;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::regression::{linear_fit, polynomial_fit, LinearFit};
    pub use crate::solvers::{
        bisection, bisection_checked, secant, Bracket, Sign, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
