//! The oscillator's equation of motion in state-space form.
//!
//! `m*x'' + c*x' + k*x = 0` is rewritten as a first-order system in the
//! displacement `x` and a rate `z` that plays the role of velocity:
//!
//! ```text
//! x' = z
//! z' = -(c*z + k*x) / m
//! ```
//!
//! Forward Euler then advances the state with
//!
//! ```text
//! z_{i+1} = z_i - h/m * (c*z_i + k*x_i)
//! x_{i+1} = x_i + h * z_i
//! ```

use std::convert::Infallible;

use sdof_core::{
    DerivativeOf, Model, Observer, OdeProblem, OscillatorModel, Snapshot, StepIntegrable,
    TimeSeries, TimeSeriesSolver,
};
use tracing::{debug, warn};

use super::euler::{self, Action, Event, Status};
use crate::Error;

/// Displacement and rate of the mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub displacement: f64,
    pub rate: f64,
}

/// Time derivative of [`MotionState`].
///
/// `acceleration` is also recorded per sample as a diagnostic; it never feeds
/// back into the recurrence except through this derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRates {
    pub velocity: f64,
    pub acceleration: f64,
}

impl StepIntegrable<f64> for MotionState {
    type Derivative = MotionRates;

    fn step(&self, derivative: MotionRates, h: f64) -> Self {
        Self {
            displacement: self.displacement + h * derivative.velocity,
            rate: self.rate + h * derivative.acceleration,
        }
    }
}

/// Input of the equation of motion at one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionInput {
    pub step: usize,
    pub time: f64,
    pub state: MotionState,
}

/// Euler event carrying one oscillator sample.
pub type MotionEvent = Event<MotionInput, MotionRates>;

/// The equation of motion of one [`OscillatorModel`].
///
/// Serves as both the [`Model`] evaluated by the Euler engine and the
/// [`OdeProblem`] that wires its state through the steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationOfMotion {
    model: OscillatorModel,
}

impl EquationOfMotion {
    #[must_use]
    pub fn new(model: OscillatorModel) -> Self {
        Self { model }
    }

    /// The state at `t = 0`, taken from the model's initial conditions.
    #[must_use]
    pub fn initial_input(&self) -> MotionInput {
        MotionInput {
            step: 0,
            time: 0.0,
            state: MotionState {
                displacement: self.model.initial_displacement(),
                rate: self.model.initial_velocity(),
            },
        }
    }
}

impl Model for EquationOfMotion {
    type Input = MotionInput;
    type Output = MotionRates;
    type Error = Infallible;

    fn call(&self, input: &MotionInput) -> Result<MotionRates, Infallible> {
        let MotionState { displacement, rate } = input.state;
        Ok(MotionRates {
            velocity: rate,
            acceleration: self.model.acceleration(displacement, rate),
        })
    }
}

impl OdeProblem for EquationOfMotion {
    type Input = MotionInput;
    type Output = MotionRates;
    type Delta = f64;
    type State = MotionState;
    type Error = Infallible;

    fn state(&self, input: &MotionInput) -> Result<MotionState, Infallible> {
        Ok(input.state)
    }

    fn derivative(
        &self,
        _input: &MotionInput,
        output: &MotionRates,
    ) -> Result<DerivativeOf<MotionState, f64>, Infallible> {
        Ok(*output)
    }

    /// Timestamps are `step * h`, not a running sum, so they do not drift.
    fn build_input(
        &self,
        base: &MotionInput,
        state: &MotionState,
        h: &f64,
    ) -> Result<MotionInput, Infallible> {
        let step = base.step + 1;
        #[allow(clippy::cast_precision_loss)]
        let time = step as f64 * h;
        Ok(MotionInput {
            step,
            time,
            state: *state,
        })
    }
}

/// Everything a forward Euler run records, one value per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct EulerRun {
    pub status: Status,
    pub displacement: TimeSeries,
    pub rate: TimeSeries,
    /// `-(c*z_i + k*x_i) / m` at each sample. Multiply by the step size to get
    /// the per-step increment of the rate.
    pub acceleration: TimeSeries,
}

/// Fixed-step forward Euler integration of an [`OscillatorModel`].
///
/// Produces `floor(duration / step_size)` samples at `0, h, 2h, ...`. No
/// stability correction is applied: for a step that is large relative to
/// `sqrt(m/k)` or `m/c` the amplitude grows without bound, exactly as the
/// method predicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardEuler;

impl ForwardEuler {
    /// Integrates `model` over its full horizon.
    ///
    /// # Errors
    ///
    /// Returns an error only if the integration engine fails.
    pub fn run(&self, model: &OscillatorModel) -> Result<EulerRun, Error> {
        self.run_observed(model, ())
    }

    /// Integrates `model`, forwarding every sample to `observer`.
    ///
    /// If the observer returns [`Action::StopEarly`] the run ends there and
    /// the returned series hold the samples recorded so far.
    ///
    /// # Errors
    ///
    /// Returns an error only if the integration engine fails.
    pub fn run_observed<Obs>(&self, model: &OscillatorModel, observer: Obs) -> Result<EulerRun, Error>
    where
        Obs: Observer<MotionEvent, Action>,
    {
        let system = EquationOfMotion::new(*model);
        let samples = model.sample_count();

        debug!(
            samples,
            step_size = model.step_size(),
            damping_ratio = model.damping_ratio(),
            "starting forward Euler run"
        );

        let mut times = Vec::with_capacity(samples);
        let mut displacement = Vec::with_capacity(samples);
        let mut rate = Vec::with_capacity(samples);
        let mut acceleration = Vec::with_capacity(samples);
        let mut first_non_finite = None;

        let progress = euler::solve_with(
            &system,
            &system,
            system.initial_input(),
            model.step_size(),
            samples.saturating_sub(1),
            observer,
            |snapshot: &Snapshot<MotionInput, MotionRates>| {
                let MotionInput { step, time, state } = snapshot.input;
                if first_non_finite.is_none()
                    && !(state.displacement.is_finite() && state.rate.is_finite())
                {
                    first_non_finite = Some((step, time));
                }
                times.push(time);
                displacement.push(state.displacement);
                rate.push(state.rate);
                acceleration.push(snapshot.output.acceleration);
            },
        )?;

        if let Some((step, time)) = first_non_finite {
            warn!(step, time, "forward Euler state is no longer finite");
        }

        debug!(steps = progress.steps, status = ?progress.status, "finished forward Euler run");

        Ok(EulerRun {
            status: progress.status,
            displacement: TimeSeries::new(times.clone(), displacement)?,
            rate: TimeSeries::new(times.clone(), rate)?,
            acceleration: TimeSeries::new(times, acceleration)?,
        })
    }
}

impl TimeSeriesSolver for ForwardEuler {
    type Error = Error;

    fn label(&self) -> &'static str {
        "Forward Euler"
    }

    fn solve(&self, model: &OscillatorModel) -> Result<TimeSeries, Error> {
        Ok(self.run(model)?.displacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn model() -> OscillatorModel {
        OscillatorModel::builder(1.0, 0.2, 20.0)
            .step_size(0.01)
            .duration(1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn first_steps_follow_the_recurrence() {
        let model = model().with_initial_conditions(0.05, 0.3).unwrap();
        let (m, c, k, h) = (1.0, 0.2, 20.0, 0.01);

        let run = ForwardEuler.run(&model).unwrap();

        let (mut x, mut z) = (0.05, 0.3);
        for i in 0..5 {
            assert_relative_eq!(run.displacement.values()[i], x, epsilon = 1e-15);
            assert_relative_eq!(run.rate.values()[i], z, epsilon = 1e-15);
            assert_relative_eq!(run.acceleration.values()[i], -(c * z + k * x) / m, epsilon = 1e-14);
            let next_z = z - h / m * (c * z + k * x);
            x += h * z;
            z = next_z;
        }
    }

    #[test]
    fn produces_one_sample_per_step() {
        let run = ForwardEuler.run(&model()).unwrap();

        assert_eq!(run.status, Status::Complete);
        assert_eq!(run.displacement.len(), 100);
        assert_eq!(run.rate.len(), 100);
        assert_eq!(run.acceleration.len(), 100);
        assert_relative_eq!(run.displacement.times()[37], 0.37);
        assert_eq!(run.displacement.first(), Some((0.0, 0.05)));
    }

    #[test]
    fn initial_acceleration_comes_from_the_equation_of_motion() {
        let run = ForwardEuler.run(&model()).unwrap();
        assert_relative_eq!(run.acceleration.values()[0], -20.0 * 0.05);
    }

    #[test]
    fn a_single_sample_holds_the_initial_condition() {
        let model = OscillatorModel::builder(1.0, 0.2, 20.0)
            .step_size(0.5)
            .duration(0.5)
            .build()
            .unwrap();

        let series = ForwardEuler.solve(&model).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.first(), Some((0.0, 0.05)));
    }

    #[test]
    fn observer_sees_every_sample_and_can_stop() {
        let mut seen = Vec::new();
        let run = ForwardEuler
            .run_observed(&model(), |event: &MotionEvent| {
                seen.push(event.snapshot.input.time);
                (event.step == 9).then_some(Action::StopEarly)
            })
            .unwrap();

        assert_eq!(run.status, Status::StoppedByObserver);
        assert_eq!(run.displacement.len(), 10);
        assert_eq!(seen.len(), 10);
        assert_eq!(seen.as_slice(), run.displacement.times());
    }

    #[test]
    fn coarse_steps_diverge_to_non_finite_values() {
        let model = OscillatorModel::builder(1.0, 0.0, 1e6)
            .step_size(0.1)
            .duration(100.0)
            .build()
            .unwrap();

        let series = ForwardEuler.solve(&model).unwrap();

        assert_eq!(series.len(), 1000);
        assert!(!series.last().unwrap().1.is_finite());
    }
}
