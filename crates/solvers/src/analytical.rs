//! Closed-form response of an underdamped oscillator.
//!
//! For `0 <= chi < 1` the free response to `(x0, v0)` is
//!
//! ```text
//! x(t) = exp(-chi * wn * t) * (A * cos(wd * t) + B * sin(wd * t))
//!
//! wd = wn * sqrt(1 - chi^2)
//! A  = x0
//! B  = (v0 + chi * wn * x0) / wd
//! ```
//!
//! At `chi >= 1` the damped frequency is no longer real, so critically damped
//! and overdamped models are rejected with [`Error::UnsupportedRegime`]
//! instead of producing `NaN`.

use sdof_core::{
    InvalidParameter, MAX_SAMPLES, OscillatorModel, TimeSeries, TimeSeriesSolver, sample_count,
};
use tracing::debug;

use crate::Error;

/// Default sampling resolution in seconds.
///
/// This is a presentation choice; it does not depend on the model's
/// integration step size.
pub const DEFAULT_RESOLUTION: f64 = 0.0001;

/// Samples the closed-form underdamped response at a fixed resolution.
///
/// Any valid model yields a series. A resolution coarser than the horizon
/// gives the single sample at `t = 0`, and a resolution so fine that the
/// horizon would exceed `max_samples` is coarsened to fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analytical {
    resolution: f64,
    max_samples: usize,
}

impl Analytical {
    /// Creates a solver sampling every `resolution` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if `resolution` is not strictly positive.
    pub fn with_resolution(resolution: f64) -> Result<Self, InvalidParameter> {
        let resolution = InvalidParameter::strictly_positive("resolution", resolution)?;
        Ok(Self {
            resolution,
            ..Self::default()
        })
    }

    /// Caps the number of samples per series, clamped to `1..=MAX_SAMPLES`.
    #[must_use]
    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples.clamp(1, MAX_SAMPLES);
        self
    }

    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    #[must_use]
    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Sample count and spacing used over `duration`.
    fn grid(&self, duration: f64) -> (usize, f64) {
        #[allow(clippy::cast_precision_loss)]
        let spacing = self.resolution.max(duration / self.max_samples as f64);
        let samples = sample_count(duration, spacing).clamp(1, self.max_samples);
        (samples, spacing)
    }
}

impl Default for Analytical {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            max_samples: MAX_SAMPLES,
        }
    }
}

impl TimeSeriesSolver for Analytical {
    type Error = Error;

    fn label(&self) -> &'static str {
        "Analytical"
    }

    fn solve(&self, model: &OscillatorModel) -> Result<TimeSeries, Error> {
        let response = Underdamped::new(model)?;
        let (samples, spacing) = self.grid(model.duration());

        debug!(
            samples,
            spacing,
            resolution = self.resolution,
            damping_ratio = model.damping_ratio(),
            "sampling analytical response"
        );

        Ok(TimeSeries::sample(samples, spacing, |t| response.displacement(t))?)
    }
}

/// Coefficients of the underdamped free response of one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Underdamped {
    decay_rate: f64,
    damped_frequency: f64,
    a: f64,
    b: f64,
}

impl Underdamped {
    /// Solves for the response coefficients from the model's initial
    /// conditions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRegime`] if the damping ratio is 1 or more.
    pub fn new(model: &OscillatorModel) -> Result<Self, Error> {
        let wn = model.natural_frequency();
        let chi = model.damping_ratio();
        if chi >= 1.0 {
            return Err(Error::UnsupportedRegime { damping_ratio: chi });
        }

        let wd = wn * (1.0 - chi * chi).sqrt();
        let x0 = model.initial_displacement();
        let v0 = model.initial_velocity();

        Ok(Self {
            decay_rate: chi * wn,
            damped_frequency: wd,
            a: x0,
            b: (v0 + chi * wn * x0) / wd,
        })
    }

    /// Exponential decay rate `chi * wn` of the envelope.
    #[must_use]
    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Damped natural frequency `wd` in rad/s.
    #[must_use]
    pub fn damped_frequency(&self) -> f64 {
        self.damped_frequency
    }

    /// Upper bound on `|x(t)|`: `exp(-chi * wn * t) * sqrt(A^2 + B^2)`.
    #[must_use]
    pub fn envelope(&self, t: f64) -> f64 {
        (-self.decay_rate * t).exp() * self.a.hypot(self.b)
    }

    /// Displacement at time `t`.
    #[must_use]
    pub fn displacement(&self, t: f64) -> f64 {
        let wd_t = self.damped_frequency * t;
        (-self.decay_rate * t).exp() * (self.a * wd_t.cos() + self.b * wd_t.sin())
    }
}
