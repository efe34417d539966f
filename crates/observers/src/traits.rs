//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types so an
//! observer can be written once and reused.
//!
//! # Example
//!
//! ```rust
//! use sdof_core::Observer;
//! use sdof_observers::traits::{CanStopEarly, HasSample};
//!
//! /// Stops once the mass first crosses its rest position.
//! struct FirstCrossing {
//!     start_sign: Option<f64>,
//! }
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for FirstCrossing {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let sign = event.displacement().signum();
//!         match self.start_sign {
//!             None => {
//!                 self.start_sign = Some(sign);
//!                 None
//!             }
//!             Some(start) if start != sign => Some(A::stop_early()),
//!             Some(_) => None,
//!         }
//!     }
//! }
//! ```

use sdof_solvers::transient::{euler, oscillator::MotionEvent};

/// An event that carries one displacement sample.
pub trait HasSample {
    /// Time of the sample.
    fn time(&self) -> f64;

    /// Displacement at [`time`](HasSample::time).
    fn displacement(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasSample for MotionEvent {
    fn time(&self) -> f64 {
        self.input().time
    }

    fn displacement(&self) -> f64 {
        self.input().state.displacement
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
