//! Forward Euler against the closed-form response, in one window.
//!
//! # Usage
//!
//! ```text
//! cargo run -p sdof-observers --example compare --features plot -- <mass> <damping> <stiffness> [step]
//! cargo run -p sdof-observers --example compare --features plot -- 1 0.2 20
//! cargo run -p sdof-observers --example compare --features plot -- 1 0.2 20 0.1
//! ```
//!
//! The default step of 0.0001 s tracks the exact solution closely. A coarse
//! step such as 0.1 s makes the Euler trace grow while the exact response
//! decays. Overdamped systems are integrated but have no analytical trace.

use std::error::Error;

use sdof_core::{OscillatorModel, defaults};
use sdof_observers::{PlotObserver, ShowConfig};
use sdof_solvers::{Error as SolveError, run_analytical, run_euler};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<f64> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|err| format!("expected numbers: {err}"))?;

    let (mass, damping, stiffness, step_size) = match args.as_slice() {
        [m, c, k] => (*m, *c, *k, defaults::STEP_SIZE),
        [m, c, k, h] => (*m, *c, *k, *h),
        _ => {
            eprintln!("Usage: compare <mass> <damping> <stiffness> [step]");
            std::process::exit(1);
        }
    };

    let model = OscillatorModel::builder(mass, damping, stiffness)
        .step_size(step_size)
        .build()?;

    let mut obs = PlotObserver::<2>::new(["Euler's", "Analytical"]);
    obs.record_series(0, &run_euler(&model)?);

    match run_analytical(&model) {
        Ok(series) => obs.record_series(1, &series),
        Err(SolveError::UnsupportedRegime { damping_ratio }) => {
            tracing::warn!(damping_ratio, "no closed-form response, plotting Euler only");
        }
        Err(err) => return Err(err.into()),
    }

    obs.show(
        ShowConfig::new()
            .title(format!(
                "One Degree of Freedom System (m={mass}, c={damping}, k={stiffness}, h={step_size})"
            ))
            .legend(),
    )?;

    Ok(())
}
