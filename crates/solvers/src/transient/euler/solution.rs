use sdof_core::Snapshot;

/// How an Euler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every requested step was taken.
    Complete,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// How far a run got, without its history.
///
/// Returned by [`solve_with`](super::solve_with), whose caller keeps the
/// samples it needs itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub status: Status,

    /// Steps taken after the initial condition. The run produced
    /// `steps + 1` snapshots.
    pub steps: usize,
}

impl Progress {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Number of snapshots the run produced, including the initial one.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.steps + 1
    }
}

/// An Euler run together with every snapshot it produced.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,

    /// Snapshots starting with the initial condition, one per step after it.
    pub history: Vec<Snapshot<I, O>>,

    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            status: self.status,
            steps: self.steps,
        }
    }
}
