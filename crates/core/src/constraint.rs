//! Parameter constraints enforced when models and solvers are configured.
//!
//! Every check reports the offending parameter by name together with the
//! constraint it violated, so a bad configuration never surfaces later as an
//! unexplained `NaN` in an output series.

use std::fmt;

use thiserror::Error;

/// Upper bound on the number of samples a single run may produce.
///
/// Output series are preallocated up front, so the bound caps memory use.
pub const MAX_SAMPLES: usize = 50_000_000;

/// Relative distance from an integer within which a sample ratio snaps to it.
const SNAP_TOLERANCE: f64 = 1e-9;

/// A constraint a parameter must satisfy.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Constraint {
    /// Neither infinite nor `NaN`.
    Finite,
    /// Finite and greater than zero.
    StrictlyPositive,
    /// Finite and zero or greater.
    NonNegative,
    /// No larger than the named parameter.
    AtMost(&'static str),
    /// Resolves the horizon into at most this many samples.
    MaxSamples(usize),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite => write!(f, "must be finite"),
            Self::StrictlyPositive => write!(f, "must be strictly positive"),
            Self::NonNegative => write!(f, "must be non-negative"),
            Self::AtMost(other) => write!(f, "must not exceed `{other}`"),
            Self::MaxSamples(max) => write!(f, "must yield at most {max} samples"),
        }
    }
}

/// A parameter that violates its [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid parameter `{name}` = {value}: {constraint}")]
pub struct InvalidParameter {
    /// Name of the offending parameter.
    pub name: &'static str,
    /// The rejected value.
    pub value: f64,
    /// The constraint the value violates.
    pub constraint: Constraint,
}

impl InvalidParameter {
    /// Creates an error for `name = value` violating `constraint`.
    #[must_use]
    pub fn new(name: &'static str, value: f64, constraint: Constraint) -> Self {
        Self {
            name,
            value,
            constraint,
        }
    }

    /// Checks that `value` is finite.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::Finite`] for infinite or `NaN` values.
    pub fn finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::new(name, value, Constraint::Finite))
        }
    }

    /// Checks that `value` is finite and greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::Finite`] or [`Constraint::StrictlyPositive`].
    pub fn strictly_positive(name: &'static str, value: f64) -> Result<f64, Self> {
        let value = Self::finite(name, value)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(Self::new(name, value, Constraint::StrictlyPositive))
        }
    }

    /// Checks that `value` is finite and zero or greater.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::Finite`] or [`Constraint::NonNegative`].
    pub fn non_negative(name: &'static str, value: f64) -> Result<f64, Self> {
        let value = Self::finite(name, value)?;
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::new(name, value, Constraint::NonNegative))
        }
    }

    /// Checks that a sample spacing resolves `duration` into a bounded,
    /// non-empty set of samples, and returns the sample count.
    ///
    /// `duration` is assumed to have been validated already.
    ///
    /// # Errors
    ///
    /// Fails if `spacing` is not strictly positive, exceeds `duration`, or
    /// would yield more than [`MAX_SAMPLES`] samples.
    pub fn spacing_within(name: &'static str, spacing: f64, duration: f64) -> Result<usize, Self> {
        let spacing = Self::strictly_positive(name, spacing)?;
        if spacing > duration {
            return Err(Self::new(name, spacing, Constraint::AtMost("duration")));
        }
        if duration / spacing > MAX_SAMPLES as f64 {
            return Err(Self::new(name, spacing, Constraint::MaxSamples(MAX_SAMPLES)));
        }
        Ok(sample_count(duration, spacing))
    }
}

/// Number of samples at `0, spacing, 2 * spacing, ...` covering `[0, duration)`.
///
/// This is `floor(duration / spacing)`, except that a ratio within a relative
/// `1e-9` of an integer snaps to that integer. Without the snap, `2.0 / 0.0001`
/// would be at the mercy of binary rounding.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sample_count(duration: f64, spacing: f64) -> usize {
    let ratio = duration / spacing;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= SNAP_TOLERANCE * nearest.max(1.0) {
        nearest as usize
    } else {
        ratio.floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_snaps_to_integer_ratios() {
        assert_eq!(sample_count(2.0, 0.0001), 20_000);
        assert_eq!(sample_count(1.0, 0.1), 10);
        assert_eq!(sample_count(0.3, 0.1), 3);
    }

    #[test]
    fn sample_count_floors_fractional_ratios() {
        assert_eq!(sample_count(1.0, 0.3), 3);
        assert_eq!(sample_count(2.5, 1.0), 2);
    }

    #[test]
    fn sample_count_of_degenerate_inputs_is_zero() {
        assert_eq!(sample_count(0.0, 0.1), 0);
        assert_eq!(sample_count(1.0, 0.0), 0);
        assert_eq!(sample_count(1.0, f64::NAN), 0);
    }

    #[test]
    fn strictly_positive_rejects_zero_and_nan() {
        let err = InvalidParameter::strictly_positive("mass", 0.0).unwrap_err();
        assert_eq!(err.constraint, Constraint::StrictlyPositive);
        assert_eq!(err.name, "mass");

        let err = InvalidParameter::strictly_positive("mass", f64::NAN).unwrap_err();
        assert_eq!(err.constraint, Constraint::Finite);
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(InvalidParameter::non_negative("damping", 0.0), Ok(0.0));
        let err = InvalidParameter::non_negative("damping", -0.1).unwrap_err();
        assert_eq!(err.constraint, Constraint::NonNegative);
    }

    #[test]
    fn spacing_must_fit_the_duration() {
        assert_eq!(InvalidParameter::spacing_within("step_size", 0.5, 2.0), Ok(4));

        let err = InvalidParameter::spacing_within("step_size", 3.0, 2.0).unwrap_err();
        assert_eq!(err.constraint, Constraint::AtMost("duration"));

        let err = InvalidParameter::spacing_within("step_size", 1e-9, 2.0).unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxSamples(MAX_SAMPLES));
    }

    #[test]
    fn message_names_parameter_and_constraint() {
        let err = InvalidParameter::new("mass", 0.0, Constraint::StrictlyPositive);
        assert_eq!(
            err.to_string(),
            "invalid parameter `mass` = 0: must be strictly positive"
        );
    }
}
