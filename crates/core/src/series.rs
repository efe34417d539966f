use thiserror::Error;

use crate::InvalidParameter;

/// Errors from assembling a [`TimeSeries`] out of raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SeriesError {
    #[error("{times} timestamps but {values} values")]
    LengthMismatch { times: usize, values: usize },

    #[error("series must start at t = 0, found t = {0}")]
    NonZeroStart(f64),

    #[error("timestamp at index {index} is not strictly increasing")]
    NotIncreasing { index: usize },
}

/// Displacement samples at strictly increasing timestamps starting from zero.
///
/// Solvers build a series once, preallocated to its known length, and hand
/// it out read-only. Two series from the same model are comparable when they
/// share a horizon, even if their sample spacing differs; see
/// [`max_abs_difference`](TimeSeries::max_abs_difference).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a series from matching timestamps and values.
    ///
    /// # Errors
    ///
    /// Returns a [`SeriesError`] if the lengths differ, the first timestamp
    /// is not zero, or the timestamps are not strictly increasing.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if times.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if let Some(&first) = times.first() {
            if first != 0.0 {
                return Err(SeriesError::NonZeroStart(first));
            }
        }
        if let Some(index) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeriesError::NotIncreasing { index: index + 1 });
        }
        Ok(Self { times, values })
    }

    /// Samples `f` at `0, spacing, 2 * spacing, ...` for `count` samples.
    ///
    /// Timestamps are computed as `i * spacing` rather than accumulated, so
    /// long series do not drift.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if `spacing` is not strictly positive.
    pub fn sample(
        count: usize,
        spacing: f64,
        mut f: impl FnMut(f64) -> f64,
    ) -> Result<Self, InvalidParameter> {
        let spacing = InvalidParameter::strictly_positive("spacing", spacing)?;
        let mut times = Vec::with_capacity(count);
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 * spacing;
            times.push(t);
            values.push(f(t));
        }
        Ok(Self { times, values })
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over `(time, value)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    #[must_use]
    pub fn first(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.values.first()?))
    }

    #[must_use]
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.times.last()?, *self.values.last()?))
    }

    /// Timestamp of the last sample, or zero for an empty series.
    #[must_use]
    pub fn horizon(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Consumes the series and returns its timestamps and values.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.values)
    }

    /// Largest `|value|` over the whole series.
    ///
    /// Returns `NaN` if any value is `NaN`, and zero for an empty series.
    #[must_use]
    pub fn peak_abs(&self) -> f64 {
        self.peak_abs_within(0.0, f64::INFINITY)
    }

    /// Largest `|value|` over samples with `start <= t < end`.
    #[must_use]
    pub fn peak_abs_within(&self, start: f64, end: f64) -> f64 {
        self.iter()
            .filter(|&(t, _)| t >= start && t < end)
            .map(|(_, v)| v.abs())
            .fold(0.0, nan_max)
    }

    /// Linearly interpolated value at `t`.
    ///
    /// Returns `None` if `t` lies outside `[0, horizon]`.
    #[must_use]
    pub fn value_at(&self, t: f64) -> Option<f64> {
        let (&first, &last) = (self.times.first()?, self.times.last()?);
        if !(first..=last).contains(&t) {
            return None;
        }
        let upper = self.times.partition_point(|&ti| ti < t);
        if self.times[upper] == t {
            return Some(self.values[upper]);
        }
        let lower = upper - 1;
        let (t0, t1) = (self.times[lower], self.times[upper]);
        let (v0, v1) = (self.values[lower], self.values[upper]);
        Some(v0 + (v1 - v0) * (t - t0) / (t1 - t0))
    }

    /// Largest absolute difference between this series and `reference`.
    ///
    /// The reference is resampled at this series' timestamps by linear
    /// interpolation; samples beyond the reference's horizon are ignored.
    /// Returns `None` when the two series share no timestamps, and `NaN` if
    /// any compared sample is `NaN`.
    #[must_use]
    pub fn max_abs_difference(&self, reference: &TimeSeries) -> Option<f64> {
        self.iter()
            .filter_map(|(t, v)| reference.value_at(t).map(|r| (v - r).abs()))
            .reduce(nan_max)
    }
}

/// Like [`f64::max`], but a `NaN` on either side wins.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = (f64, f64);
    type IntoIter = std::iter::Zip<
        std::iter::Copied<std::slice::Iter<'a, f64>>,
        std::iter::Copied<std::slice::Iter<'a, f64>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}
