use sdof_core::Observer;
use tracing::info;

use crate::traits::{CanStopEarly, HasSample};

/// Stops a run once `|displacement|` exceeds a limit or stops being finite.
///
/// Forward Euler is left unstabilized on purpose, so a coarse step grows
/// without bound. This observer lets a caller cut such a run short instead of
/// integrating all the way to overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeLimit {
    limit: f64,
    exceeded_at: Option<f64>,
}

impl AmplitudeLimit {
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self {
            limit,
            exceeded_at: None,
        }
    }

    /// Time of the first sample beyond the limit, if any.
    #[must_use]
    pub fn exceeded_at(&self) -> Option<f64> {
        self.exceeded_at
    }
}

impl<E: HasSample, A: CanStopEarly> Observer<E, A> for AmplitudeLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        let x = event.displacement();
        if x.abs() <= self.limit {
            return None;
        }
        let time = event.time();
        info!(time, displacement = x, limit = self.limit, "amplitude limit exceeded");
        self.exceeded_at = Some(time);
        Some(A::stop_early())
    }
}

impl<E: HasSample, A: CanStopEarly> Observer<E, A> for &mut AmplitudeLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
