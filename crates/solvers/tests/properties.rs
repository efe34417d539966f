use proptest::prelude::*;
use sdof_core::{OscillatorModel, Regime};
use sdof_solvers::{Error, run_analytical, run_euler};

prop_compose! {
    fn valid_model()(
        mass in 0.1_f64..10.0,
        damping in 0.0_f64..5.0,
        stiffness in 0.1_f64..100.0,
        x0 in -1.0_f64..1.0,
        v0 in -1.0_f64..1.0,
        step_size in 0.001_f64..0.05,
    ) -> OscillatorModel {
        OscillatorModel::builder(mass, damping, stiffness)
            .initial_displacement(x0)
            .initial_velocity(v0)
            .step_size(step_size)
            .duration(0.5)
            .build()
            .unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn euler_is_deterministic(model in valid_model()) {
        prop_assert_eq!(run_euler(&model).unwrap(), run_euler(&model).unwrap());
    }

    #[test]
    fn euler_starts_at_initial_displacement(model in valid_model()) {
        let series = run_euler(&model).unwrap();
        prop_assert_eq!(series.len(), model.sample_count());
        prop_assert_eq!(series.first(), Some((0.0, model.initial_displacement())));
    }

    #[test]
    fn analytical_starts_at_initial_displacement_or_rejects(model in valid_model()) {
        match run_analytical(&model) {
            Ok(series) => {
                let (t0, x0) = series.first().unwrap();
                prop_assert_eq!(t0, 0.0);
                prop_assert!((x0 - model.initial_displacement()).abs() <= 1e-12);
                prop_assert!(series.values().iter().all(|x| x.is_finite()));
            }
            Err(Error::UnsupportedRegime { damping_ratio }) => {
                prop_assert!(damping_ratio >= 1.0);
                prop_assert!(!model.regime().oscillates());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn timestamps_increase_from_zero(model in valid_model()) {
        let series = run_euler(&model).unwrap();
        prop_assert!(series.times().windows(2).all(|w| w[1] > w[0]));
        prop_assert!(series.horizon() < model.duration());
    }

    #[test]
    fn non_positive_mass_is_always_rejected(mass in -10.0_f64..=0.0) {
        let err = OscillatorModel::new(mass, 0.2, 20.0).unwrap_err();
        prop_assert_eq!(err.name, "mass");
    }

    #[test]
    fn underdamped_models_are_supported(chi in 0.0_f64..0.99, stiffness in 0.1_f64..100.0) {
        let damping = 2.0 * chi * stiffness.sqrt();
        let model = OscillatorModel::new(1.0, damping, stiffness).unwrap();
        prop_assert!(matches!(model.regime(), Regime::Undamped | Regime::Underdamped));
        prop_assert!(run_analytical(&model).is_ok());
    }
}
