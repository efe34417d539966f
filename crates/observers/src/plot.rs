//! Plotting front end for comparing displacement histories.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use sdof_core::{Observer, TimeSeries};
use sdof_solvers::transient::oscillator::MotionEvent;

use crate::traits::HasSample;

/// Window title used when [`ShowConfig::title`] is not set.
pub const DEFAULT_TITLE: &str = "One Degree of Freedom System";

/// Configuration for rendering a [`PlotObserver`] result.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Light damping").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    line_width: f32,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with the default title, no legend, and thin
    /// lines.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            line_width: 0.8,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Sets the stroke width of every trace, in points.
    #[must_use]
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to pass a [`PlotObserver`] straight to a
/// solver as its observer. Return `None` from [`x`][Plottable::x] to skip the
/// event entirely; return `None` in a trace slot to skip only that trace.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// Euler samples plot as displacement over time.
impl Plottable<1> for MotionEvent {
    fn x(&self) -> Option<f64> {
        Some(self.time())
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.displacement())]
    }
}

/// Collects named traces and displays them in an egui window.
///
/// The const generic `N` is the number of traces. Data arrives either from
/// finished series through [`record_series`][PlotObserver::record_series], or
/// live from a solver when `&mut PlotObserver` is passed as its observer.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Euler's", "Analytical"]);
/// obs.record_series(0, &run_euler(&model)?);
/// obs.record_series(1, &run_analytical(&model)?);
/// obs.show(ShowConfig::new().legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Appends every sample of `series` to trace `trace`.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    pub fn record_series(&mut self, trace: usize, series: &TimeSeries) {
        let points = &mut self.data[trace];
        points.reserve(series.len());
        points.extend(series.iter().map(|(t, x)| [t, x]));
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    line_width: config.line_width,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    line_width: f32,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("displacement")
                .x_axis_label("time [s]")
                .y_axis_label("displacement");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name).width(self.line_width));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sdof_core::{OscillatorModel, Snapshot};
    use sdof_solvers::{
        ForwardEuler,
        transient::{
            euler::{Action, Event},
            oscillator::{EquationOfMotion, MotionRates},
        },
    };

    fn points<const N: usize>(obs: &PlotObserver<N>, trace: usize) -> &[[f64; 2]] {
        &obs.data[trace]
    }

    #[test]
    fn record_skips_missing_traces() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        obs.record(1.0, [Some(10.0), None]);
        obs.record(2.0, [None, Some(20.0)]);
        assert_eq!(points(&obs, 0), [[1.0, 10.0]]);
        assert_eq!(points(&obs, 1), [[2.0, 20.0]]);
    }

    #[test]
    fn record_series_appends_every_sample() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["Euler's", "Analytical"]);
        let series = TimeSeries::sample(3, 0.5, |t| 2.0 * t).unwrap();

        obs.record_series(1, &series);

        assert!(points(&obs, 0).is_empty());
        assert_eq!(points(&obs, 1), [[0.0, 0.0], [0.5, 1.0], [1.0, 2.0]]);
    }

    #[test]
    fn records_live_euler_samples() {
        let model = OscillatorModel::builder(1.0, 0.2, 20.0)
            .step_size(0.1)
            .duration(1.0)
            .build()
            .unwrap();
        let mut obs = PlotObserver::<1>::new(["Euler's"]);

        let run = ForwardEuler.run_observed(&model, &mut obs).unwrap();

        let recorded: Vec<[f64; 2]> = run.displacement.iter().map(|(t, x)| [t, x]).collect();
        assert_eq!(points(&obs, 0), recorded.as_slice());
    }

    #[test]
    fn never_returns_an_action() {
        let model = OscillatorModel::new(1.0, 0.2, 20.0).unwrap();
        let event = Event {
            step: 0,
            snapshot: Snapshot::new(
                EquationOfMotion::new(model).initial_input(),
                MotionRates {
                    velocity: 0.0,
                    acceleration: -1.0,
                },
            ),
        };
        let mut obs = PlotObserver::<1>::new(["x"]);

        let action: Option<Action> = obs.observe(&event);

        assert!(action.is_none());
        assert_eq!(points(&obs, 0), [[0.0, 0.05]]);
    }
}
