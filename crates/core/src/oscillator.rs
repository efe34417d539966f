//! The damped single-degree-of-freedom oscillator `m*x'' + c*x' + k*x = 0`.

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::InvalidParameter;

/// Default values used for everything but mass, damping and stiffness.
pub mod defaults {
    /// Integration step size in seconds.
    pub const STEP_SIZE: f64 = 0.0001;

    /// Simulated horizon in seconds.
    pub const DURATION: f64 = 2.0;

    /// Displacement at `t = 0`.
    pub const INITIAL_DISPLACEMENT: f64 = 0.05;

    /// Velocity at `t = 0`; the mass is released from rest.
    pub const INITIAL_VELOCITY: f64 = 0.0;
}

/// Damping regime of an oscillator, classified by its damping ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// No damping: the oscillation never decays.
    Undamped,
    /// `0 < chi < 1`: decaying oscillation.
    Underdamped,
    /// `chi == 1`: fastest return to rest without oscillating.
    CriticallyDamped,
    /// `chi > 1`: slow, monotonic return to rest.
    Overdamped,
}

impl Regime {
    /// Classifies a damping ratio.
    #[must_use]
    pub fn from_damping_ratio(chi: f64) -> Self {
        if chi == 0.0 {
            Self::Undamped
        } else if chi < 1.0 {
            Self::Underdamped
        } else if chi == 1.0 {
            Self::CriticallyDamped
        } else {
            Self::Overdamped
        }
    }

    /// Returns `true` if the response oscillates (`chi < 1`).
    #[must_use]
    pub fn oscillates(self) -> bool {
        matches!(self, Self::Undamped | Self::Underdamped)
    }
}

/// Unvalidated oscillator configuration.
///
/// This is the builder for [`OscillatorModel`] and the shape a model takes in
/// configuration files. Fields other than mass, damping and stiffness fall
/// back to [`defaults`] when omitted.
///
/// # Example
///
/// ```
/// use sdof_core::OscillatorModel;
///
/// let model = OscillatorModel::builder(1.0, 0.2, 20.0)
///     .step_size(0.001)
///     .initial_displacement(0.1)
///     .build()
///     .unwrap();
///
/// assert_eq!(model.sample_count(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct OscillatorConfig {
    pub mass: f64,
    pub damping: f64,
    pub stiffness: f64,
    #[cfg_attr(feature = "serde-derive", serde(default = "default_displacement"))]
    pub initial_displacement: f64,
    #[cfg_attr(feature = "serde-derive", serde(default = "default_velocity"))]
    pub initial_velocity: f64,
    #[cfg_attr(feature = "serde-derive", serde(default = "default_step_size"))]
    pub step_size: f64,
    #[cfg_attr(feature = "serde-derive", serde(default = "default_duration"))]
    pub duration: f64,
}

#[cfg(feature = "serde-derive")]
fn default_displacement() -> f64 {
    defaults::INITIAL_DISPLACEMENT
}

#[cfg(feature = "serde-derive")]
fn default_velocity() -> f64 {
    defaults::INITIAL_VELOCITY
}

#[cfg(feature = "serde-derive")]
fn default_step_size() -> f64 {
    defaults::STEP_SIZE
}

#[cfg(feature = "serde-derive")]
fn default_duration() -> f64 {
    defaults::DURATION
}

impl OscillatorConfig {
    /// Creates a configuration with the given physical parameters and defaults
    /// for everything else.
    #[must_use]
    pub fn new(mass: f64, damping: f64, stiffness: f64) -> Self {
        Self {
            mass,
            damping,
            stiffness,
            initial_displacement: defaults::INITIAL_DISPLACEMENT,
            initial_velocity: defaults::INITIAL_VELOCITY,
            step_size: defaults::STEP_SIZE,
            duration: defaults::DURATION,
        }
    }

    /// Sets the displacement at `t = 0`.
    #[must_use]
    pub fn initial_displacement(mut self, x0: f64) -> Self {
        self.initial_displacement = x0;
        self
    }

    /// Sets the velocity at `t = 0`.
    #[must_use]
    pub fn initial_velocity(mut self, v0: f64) -> Self {
        self.initial_velocity = v0;
        self
    }

    /// Sets the integration step size.
    #[must_use]
    pub fn step_size(mut self, h: f64) -> Self {
        self.step_size = h;
        self
    }

    /// Sets the simulated horizon.
    #[must_use]
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Validates the configuration into an [`OscillatorModel`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] naming the first parameter that violates
    /// its constraint.
    pub fn build(self) -> Result<OscillatorModel, InvalidParameter> {
        let mass = InvalidParameter::strictly_positive("mass", self.mass)?;
        let damping = InvalidParameter::non_negative("damping", self.damping)?;
        let stiffness = InvalidParameter::strictly_positive("stiffness", self.stiffness)?;
        let initial_displacement =
            InvalidParameter::finite("initial_displacement", self.initial_displacement)?;
        let initial_velocity = InvalidParameter::finite("initial_velocity", self.initial_velocity)?;
        let duration = InvalidParameter::strictly_positive("duration", self.duration)?;
        let samples = InvalidParameter::spacing_within("step_size", self.step_size, duration)?;

        Ok(OscillatorModel {
            mass,
            damping,
            stiffness,
            initial_displacement,
            initial_velocity,
            step_size: self.step_size,
            duration,
            samples,
        })
    }
}

/// Validated parameters of a damped mass-spring system and its initial
/// conditions.
///
/// A model is immutable. Restarting from a different initial condition
/// produces a new model through [`with_initial_conditions`] and friends, so
/// two runs never share mutable state.
///
/// [`with_initial_conditions`]: OscillatorModel::with_initial_conditions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorModel {
    mass: f64,
    damping: f64,
    stiffness: f64,
    initial_displacement: f64,
    initial_velocity: f64,
    step_size: f64,
    duration: f64,
    samples: usize,
}

impl OscillatorModel {
    /// Creates a model with default initial conditions, step size and duration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if mass or stiffness is not strictly
    /// positive, or damping is negative.
    pub fn new(mass: f64, damping: f64, stiffness: f64) -> Result<Self, InvalidParameter> {
        OscillatorConfig::new(mass, damping, stiffness).build()
    }

    /// Starts an [`OscillatorConfig`] for the given physical parameters.
    #[must_use]
    pub fn builder(mass: f64, damping: f64, stiffness: f64) -> OscillatorConfig {
        OscillatorConfig::new(mass, damping, stiffness)
    }

    /// Returns the configuration this model was built from.
    #[must_use]
    pub fn config(&self) -> OscillatorConfig {
        OscillatorConfig {
            mass: self.mass,
            damping: self.damping,
            stiffness: self.stiffness,
            initial_displacement: self.initial_displacement,
            initial_velocity: self.initial_velocity,
            step_size: self.step_size,
            duration: self.duration,
        }
    }

    /// Returns a copy of this model released from `(x0, v0)` instead.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if either value is not finite.
    pub fn with_initial_conditions(&self, x0: f64, v0: f64) -> Result<Self, InvalidParameter> {
        Ok(Self {
            initial_displacement: InvalidParameter::finite("initial_displacement", x0)?,
            initial_velocity: InvalidParameter::finite("initial_velocity", v0)?,
            ..*self
        })
    }

    /// Returns a copy of this model with a new initial displacement.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if `x0` is not finite.
    pub fn with_initial_displacement(&self, x0: f64) -> Result<Self, InvalidParameter> {
        self.with_initial_conditions(x0, self.initial_velocity)
    }

    /// Returns a copy of this model with a new initial velocity.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if `v0` is not finite.
    pub fn with_initial_velocity(&self, v0: f64) -> Result<Self, InvalidParameter> {
        self.with_initial_conditions(self.initial_displacement, v0)
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[must_use]
    pub fn initial_displacement(&self) -> f64 {
        self.initial_displacement
    }

    #[must_use]
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of integration samples, `floor(duration / step_size)`.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Undamped natural frequency `wn = sqrt(k / m)` in rad/s.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `chi = c / (2 * m * wn)`.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.mass * self.natural_frequency())
    }

    #[must_use]
    pub fn regime(&self) -> Regime {
        Regime::from_damping_ratio(self.damping_ratio())
    }

    /// Acceleration `-(c * v + k * x) / m` from the equation of motion.
    #[must_use]
    pub fn acceleration(&self, displacement: f64, velocity: f64) -> f64 {
        -(self.damping * velocity + self.stiffness * displacement) / self.mass
    }
}

impl TryFrom<OscillatorConfig> for OscillatorModel {
    type Error = InvalidParameter;

    fn try_from(config: OscillatorConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Constraint;

    #[test]
    fn defaults_match_a_release_from_rest() {
        let model = OscillatorModel::new(1.0, 0.2, 20.0).unwrap();

        assert_relative_eq!(model.initial_displacement(), 0.05);
        assert_relative_eq!(model.initial_velocity(), 0.0);
        assert_relative_eq!(model.step_size(), 0.0001);
        assert_relative_eq!(model.duration(), 2.0);
        assert_eq!(model.sample_count(), 20_000);
    }

    #[test]
    fn zero_mass_is_rejected() {
        let err = OscillatorModel::new(0.0, 0.2, 20.0).unwrap_err();
        assert_eq!(err.name, "mass");
        assert_eq!(err.constraint, Constraint::StrictlyPositive);
    }

    #[test]
    fn each_parameter_is_named_when_rejected() {
        let cases = [
            (OscillatorConfig::new(1.0, 0.2, 0.0), "stiffness"),
            (OscillatorConfig::new(1.0, -0.2, 20.0), "damping"),
            (OscillatorConfig::new(1.0, 0.2, 20.0).step_size(0.0), "step_size"),
            (OscillatorConfig::new(1.0, 0.2, 20.0).step_size(-1.0), "step_size"),
            (OscillatorConfig::new(1.0, 0.2, 20.0).duration(0.0), "duration"),
            (
                OscillatorConfig::new(1.0, 0.2, 20.0).initial_displacement(f64::NAN),
                "initial_displacement",
            ),
            (
                OscillatorConfig::new(1.0, 0.2, 20.0).initial_velocity(f64::INFINITY),
                "initial_velocity",
            ),
        ];

        for (config, name) in cases {
            let err = config.build().unwrap_err();
            assert_eq!(err.name, name, "{config:?}");
        }
    }

    #[test]
    fn step_larger_than_duration_is_rejected() {
        let err = OscillatorModel::builder(1.0, 0.2, 20.0)
            .duration(0.5)
            .step_size(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err.constraint, Constraint::AtMost("duration"));
    }

    #[test]
    fn restart_returns_a_new_model() {
        let original = OscillatorModel::new(1.0, 0.2, 20.0).unwrap();
        let restarted = original.with_initial_conditions(0.1, -0.5).unwrap();

        assert_relative_eq!(original.initial_displacement(), 0.05);
        assert_relative_eq!(restarted.initial_displacement(), 0.1);
        assert_relative_eq!(restarted.initial_velocity(), -0.5);
        assert_eq!(restarted.config().mass, original.mass());

        let moved = original.with_initial_velocity(2.0).unwrap();
        assert_relative_eq!(moved.initial_displacement(), 0.05);
        assert_relative_eq!(moved.initial_velocity(), 2.0);

        assert!(original.with_initial_displacement(f64::NAN).is_err());
    }

    #[test]
    fn derived_quantities() {
        let model = OscillatorModel::new(2.0, 4.0, 50.0).unwrap();

        assert_relative_eq!(model.natural_frequency(), 5.0);
        assert_relative_eq!(model.damping_ratio(), 0.2);
        assert_eq!(model.regime(), Regime::Underdamped);
        assert_relative_eq!(model.acceleration(0.1, 1.0), -(4.0 + 5.0) / 2.0);
    }

    #[test]
    fn regimes_follow_damping_ratio() {
        let regime = |c| OscillatorModel::new(1.0, c, 1.0).unwrap().regime();

        assert_eq!(regime(0.0), Regime::Undamped);
        assert_eq!(regime(0.5), Regime::Underdamped);
        assert_eq!(regime(2.0), Regime::CriticallyDamped);
        assert_eq!(regime(10.0), Regime::Overdamped);
        assert!(Regime::Undamped.oscillates());
        assert!(!Regime::Overdamped.oscillates());
    }

    #[test]
    fn config_round_trips_through_try_from() {
        let config = OscillatorConfig::new(1.0, 0.2, 20.0).duration(1.0);
        let model = OscillatorModel::try_from(config).unwrap();
        assert_eq!(model.config(), config);
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn config_deserializes_with_defaults() {
        let config: OscillatorConfig =
            serde_json::from_str(r#"{ "mass": 1.0, "damping": 0.2, "stiffness": 20.0 }"#).unwrap();

        assert_eq!(config, OscillatorConfig::new(1.0, 0.2, 20.0));

        let config: OscillatorConfig = serde_json::from_str(
            r#"{ "mass": 1.0, "damping": 0.2, "stiffness": 20.0, "step_size": 0.1 }"#,
        )
        .unwrap();
        assert_eq!(config.build().unwrap().sample_count(), 20);
    }
}
