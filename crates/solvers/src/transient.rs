//! Fixed-step time integration.
//!
//! - [`euler`]: a generic forward Euler engine for any [`OdeProblem`]
//! - [`oscillator`]: the oscillator's equation of motion in state-space form
//!   and the [`ForwardEuler`](oscillator::ForwardEuler) solver built on it
//!
//! [`OdeProblem`]: sdof_core::OdeProblem

pub mod euler;
pub mod oscillator;
