//! Forward Euler engine for ODE problems.
//!
//! Steps a model forward in time with explicit Euler, evaluating the
//! derivative at the start of each step:
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt
//! ```
//!
//! The method is first-order accurate (local error O(dt²), global O(dt)) and
//! is not stabilized: when `dt` is large compared with the system's time
//! scales the history diverges, and that divergence is reported faithfully.
//!
//! # Example
//!
//! ```ignore
//! use sdof_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial_input, dt, steps)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Progress, Solution, Status};

use sdof_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};
use tracing::debug;

/// Integrates an ODE problem for `steps` steps of size `dt`.
///
/// The returned history holds `steps + 1` snapshots: the initial condition
/// followed by one snapshot per step. Its storage is allocated once, up front.
///
/// # Observer
///
/// The observer receives an [`Event`] for every snapshot, including the
/// initial one, and may return [`Action::StopEarly`] to end the run. The
/// snapshot that triggered the stop is kept in the history.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any step. No partial
/// history is returned in that case.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let mut history = Vec::with_capacity(steps + 1);
    let Progress { status, steps } =
        solve_with(model, problem, initial, dt, steps, observer, |snapshot| {
            history.push(snapshot.clone());
        })?;

    Ok(Solution {
        status,
        history,
        steps,
    })
}

/// Integrates like [`solve`], but hands each snapshot to `record` instead of
/// keeping a history.
///
/// Callers that only need a few fields per step can write them into their own
/// preallocated buffers.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any step. Snapshots
/// recorded before the failure have already been passed to `record`.
pub fn solve_with<M, P, Obs, R>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
    mut record: R,
) -> Result<Progress, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
    R: FnMut(&Snapshot<M::Input, M::Output>),
{
    let initial_output = model.call(&initial).map_err(|err| Error::model(0, err))?;
    let mut current = Snapshot::new(initial, initial_output);

    for step in 0..=steps {
        if step > 0 {
            current = advance(model, problem, &current, dt.clone(), step)?;
        }
        record(&current);

        let event = Event {
            step,
            snapshot: current.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, requested = steps, "observer stopped Euler run early");
            return Ok(Progress {
                status: Status::StoppedByObserver,
                steps: step,
            });
        }
    }

    Ok(Progress {
        status: Status::Complete,
        steps,
    })
}

/// Integrates an ODE problem without observation.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any step.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

/// Takes one explicit step from `current` and evaluates the model there.
fn advance<M, P>(
    model: &M,
    problem: &P,
    current: &Snapshot<M::Input, M::Output>,
    dt: P::Delta,
    step: usize,
) -> Result<Snapshot<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let state = problem.state(&current.input).map_err(|err| Error::problem(step, err))?;
    let derivative = problem
        .derivative(&current.input, &current.output)
        .map_err(|err| Error::problem(step, err))?;

    let next_state = state.step(derivative, dt.clone());
    let next_input = problem
        .build_input(&current.input, &next_state, &dt)
        .map_err(|err| Error::problem(step, err))?;

    let next_output = model.call(&next_input).map_err(|err| Error::model(step, err))?;
    Ok(Snapshot::new(next_input, next_output))
}
