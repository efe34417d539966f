use crate::{OscillatorModel, TimeSeries};

/// A solver that turns an [`OscillatorModel`] into a displacement history.
///
/// Every solver in the workspace implements this, so a harness can run them
/// side by side over the same model and compare the results without knowing
/// how each one works.
pub trait TimeSeriesSolver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short human-readable name, used to label traces.
    fn label(&self) -> &'static str;

    /// Computes the displacement history of `model` over `[0, duration)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the solver cannot handle the model. No
    /// partial series is returned on failure.
    fn solve(&self, model: &OscillatorModel) -> Result<TimeSeries, Self::Error>;
}
