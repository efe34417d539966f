use sdof_core::{InvalidParameter, SeriesError};

use crate::transient::euler;

/// Errors returned by the oscillator solvers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    #[error(
        "unsupported regime: damping ratio {damping_ratio} is not below 1, \
         the closed-form response covers underdamped motion only"
    )]
    UnsupportedRegime { damping_ratio: f64 },

    #[error("integration failed: {0}")]
    Integration(#[from] euler::Error),

    #[error("malformed series: {0}")]
    Series(#[from] SeriesError),
}
