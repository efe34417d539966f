//! Parallel runs over many oscillator configurations.
//!
//! Each run owns its own state and output, so a sweep needs no coordination
//! beyond collecting the results.

use rayon::prelude::*;
use sdof_core::{OscillatorModel, TimeSeries, TimeSeriesSolver};
use tracing::debug;

/// Solves every model with `solver` in parallel.
///
/// Results are returned in the order of `models`; one failing model does not
/// affect the others.
pub fn run_all<S>(models: &[OscillatorModel], solver: &S) -> Vec<Result<TimeSeries, S::Error>>
where
    S: TimeSeriesSolver + Sync,
{
    debug!(models = models.len(), solver = solver.label(), "starting sweep");
    models.par_iter().map(|model| solver.solve(model)).collect()
}

/// Peak difference between two solvers for every model, in parallel.
///
/// For each model the `candidate` series is compared against the `reference`
/// series resampled at the candidate's timestamps (see
/// [`TimeSeries::max_abs_difference`]).
pub fn peak_differences<A, B>(
    models: &[OscillatorModel],
    reference: &A,
    candidate: &B,
) -> Vec<Result<Option<f64>, crate::Error>>
where
    A: TimeSeriesSolver<Error = crate::Error> + Sync,
    B: TimeSeriesSolver<Error = crate::Error> + Sync,
{
    debug!(
        models = models.len(),
        reference = reference.label(),
        candidate = candidate.label(),
        "starting comparison sweep"
    );
    models
        .par_iter()
        .map(|model| -> Result<Option<f64>, crate::Error> {
            let expected = reference.solve(model)?;
            let actual = candidate.solve(model)?;
            Ok(actual.max_abs_difference(&expected))
        })
        .collect()
}
