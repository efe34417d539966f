//! Observers for the oscillator solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! watching a forward Euler run as it happens, plus the plotting front end
//! that renders solver output for comparison.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for generic observers
//!   ([`HasSample`], [`CanStopEarly`])
//! - [`AmplitudeLimit`]: stops a run once the displacement leaves a bound
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] for plotting time series via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: sdof_core::Observer
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly

mod amplitude;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use amplitude::AmplitudeLimit;

#[cfg(feature = "plot")]
pub use plot::{DEFAULT_TITLE, PlotObserver, Plottable, ShowConfig};
