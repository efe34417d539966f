//! Solvers for the free response of a damped single-degree-of-freedom
//! oscillator.
//!
//! Two independent estimates of displacement over time are provided:
//!
//! - [`analytical`]: the closed-form underdamped response
//! - [`transient`]: fixed-step forward Euler integration of the equation of
//!   motion in state-space form
//!
//! Both implement [`TimeSeriesSolver`], and [`sweep`] runs either one over many
//! models in parallel. The solvers never talk to each other; comparing them is
//! up to the caller.
//!
//! # Example
//!
//! ```
//! use sdof_core::OscillatorModel;
//!
//! let model = OscillatorModel::builder(1.0, 0.2, 20.0).step_size(0.001).build()?;
//!
//! let exact = sdof_solvers::run_analytical(&model)?;
//! let euler = sdof_solvers::run_euler(&model)?;
//!
//! assert_eq!(euler.len(), 2000);
//! assert!(euler.max_abs_difference(&exact).unwrap() < 0.01);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analytical;
mod error;
pub mod sweep;
pub mod transient;

use sdof_core::{OscillatorModel, TimeSeries, TimeSeriesSolver};

pub use analytical::Analytical;
pub use error::Error;
pub use transient::oscillator::ForwardEuler;

/// Samples the closed-form underdamped response of `model`.
///
/// Uses the default [`analytical::DEFAULT_RESOLUTION`], independent of the
/// model's step size.
///
/// # Errors
///
/// Returns [`Error::UnsupportedRegime`] if the model is critically damped or
/// overdamped.
pub fn run_analytical(model: &OscillatorModel) -> Result<TimeSeries, Error> {
    Analytical::default().solve(model)
}

/// Integrates `model` with forward Euler at its own step size.
///
/// # Errors
///
/// Parameters are validated when the model is built, so this only fails if
/// the integration engine itself reports an error.
pub fn run_euler(model: &OscillatorModel) -> Result<TimeSeries, Error> {
    ForwardEuler.solve(model)
}
