//! # Flumen Hydraulics
//!
//! Open-channel flow calculations built on the `flumen-math` solvers.
//!
//! This crate provides:
//!
//! - **Channel geometry**: Rectangular channel sections with Manning's
//!   equation discharge capacity
//! - **Normal depth**: Secant-based solve for the uniform-flow depth
//!   at which channel capacity matches a target discharge
//!
//! All quantities are SI: depths and widths in metres, discharge in
//! cubic metres per second, slope dimensionless.
//!
//! ## Example
//!
//! ```rust
//! use flumen_hydraulics::{normal_depth, DepthGuesses, RectangularChannel};
//! use flumen_math::solvers::SolverConfig;
//!
//! let channel = RectangularChannel::new(10.0, 0.03, 1e-5).unwrap();
//! let config = SolverConfig::default().with_tolerance(1e-3);
//!
//! let solution = normal_depth(&channel, 10.0, DepthGuesses::default(), &config).unwrap();
//! assert!(solution.root > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod channel;
pub mod error;
pub mod normal_depth;

pub use channel::RectangularChannel;
pub use error::{HydraulicsError, HydraulicsResult};
pub use normal_depth::{normal_depth, DepthGuesses};
