/// What an observer can ask of a running Euler integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the run after the current sample, which is still recorded.
    StopEarly,
}
