use sdof_core::Snapshot;

/// One sample of an Euler run, as seen by an observer.
///
/// Step 0 carries the initial condition and each later step follows one
/// explicit update.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    pub step: usize,
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Event<I, O> {
    /// Model input at this sample.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.snapshot.input
    }

    /// Model output at this sample.
    #[must_use]
    pub fn output(&self) -> &O {
        &self.snapshot.output
    }

    /// Whether this is the initial condition rather than an integrated step.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.step == 0
    }
}
