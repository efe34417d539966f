//! Core traits and types for single-degree-of-freedom vibration modeling.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`OscillatorModel`]: validated mass, damping, stiffness, initial
//!   conditions and integration horizon of a damped mass-spring system
//! - [`TimeSeries`]: the displacement history produced by every solver
//! - [`TimeSeriesSolver`]: the capability shared by all solvers, so harnesses
//!   can compare them without knowing their internals
//! - [`Model`], [`OdeProblem`], [`StepIntegrable`]: the adapters a generic
//!   time-stepping solver uses to advance a typed state
//! - [`Observer`]: receives solver events and optionally returns control actions

mod constraint;
mod model;
mod observer;
mod ode;
mod oscillator;
mod series;
mod solver;
mod step;

pub use constraint::{Constraint, InvalidParameter, MAX_SAMPLES, sample_count};
pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use ode::OdeProblem;
pub use oscillator::{OscillatorConfig, OscillatorModel, Regime, defaults};
pub use series::{SeriesError, TimeSeries};
pub use solver::TimeSeriesSolver;
pub use step::{DerivativeOf, StepIntegrable};
