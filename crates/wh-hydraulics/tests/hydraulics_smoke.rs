//! Integration tests for the guarded hydraulic calculations.

use std::f64::consts::PI;
use wh_hydraulics::{
    Calculator, CalculatorConfig, ColebrookConfig, FlowRegime, HydraulicsError,
    LAMINAR_REYNOLDS_LIMIT, friction_factor, reynolds, velocity,
};

#[test]
fn pipe_velocity_matches_independent_recomputation() {
    let (rate, d) = (3.0, 3.0);
    let v = velocity(rate, d, 0.0).unwrap();

    let area_in2 = PI / 4.0 * d * d;
    let expected = 13.475 * rate / area_in2;

    assert!((v - expected).abs() <= 1e-12 * expected, "{v} vs {expected}");
}

#[test]
fn equal_diameters_give_zero_velocity() {
    for rate in [0.0, 0.5, 3.0, 250.0] {
        assert_eq!(velocity(rate, 4.5, 4.5).unwrap(), 0.0);
    }
}

#[test]
fn zero_viscosity_recovers_to_nan() {
    let nre = reynolds(5.7, 3.0, 9.6, 0.0).unwrap();
    assert!(nre.is_nan());
}

#[test]
fn regime_boundary() {
    let below = friction_factor(3.0, 2099.999, 0.005).unwrap();
    assert_eq!(below, 16.0 / 2099.999);
    assert_eq!(FlowRegime::from_reynolds(2099.999), FlowRegime::Laminar);

    let calc = Calculator::default();
    let at = calc.friction_detail(3.0, LAMINAR_REYNOLDS_LIMIT, 0.005).unwrap();
    assert_eq!(at.regime, FlowRegime::Turbulent);
    assert!(at.iterations > 0);
}

#[test]
fn laminar_exactness() {
    assert_eq!(friction_factor(3.0, 1000.0, 0.005).unwrap(), 0.016);
}

#[test]
fn turbulent_converges_deterministically() {
    let first = friction_factor(3.0, 100_000.0, 0.005).unwrap();
    let second = friction_factor(3.0, 100_000.0, 0.005).unwrap();
    assert!(first > 0.003 && first < 0.02, "friction {first}");
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn flat_slope_terminates_with_non_convergence() {
    // Roughness so large the log term swamps 1/sqrt(f): the finite difference
    // collapses to zero long before any cap is reached.
    let err = friction_factor(3.0, 100_000.0, 1e300).unwrap_err();
    assert!(err.is_non_convergence(), "{err:?}");
}

#[test]
fn iteration_cap_terminates_with_non_convergence() {
    let calc = Calculator::new(CalculatorConfig {
        solver: ColebrookConfig {
            max_iterations: 4,
            ..ColebrookConfig::default()
        },
        ..CalculatorConfig::default()
    });
    let err = calc.friction_factor(3.0, 100_000.0, 0.005).unwrap_err();
    assert_eq!(
        err,
        HydraulicsError::ConvergenceFailed {
            what: "iteration limit reached",
            iterations: 4,
        }
    );
}

#[test]
fn full_chain_matches_worksheet_defaults() {
    // 3 bpm through a 3 in pipe, 9.6 ppg, 2.1 cP, 0.005 in roughness.
    let v = velocity(3.0, 3.0, 0.0).unwrap();
    let nre = reynolds(v, 3.0, 9.6, 2.1).unwrap();
    let ff = friction_factor(3.0, nre, 0.005).unwrap();

    assert!((v - 5.719).abs() < 1e-3);
    assert!(nre > 70_000.0 && nre < 80_000.0, "NRe {nre}");
    assert_eq!(FlowRegime::from_reynolds(nre), FlowRegime::Turbulent);
    assert!(ff > 0.005 && ff < 0.008, "friction {ff}");
}

#[test]
fn recovered_reynolds_flows_into_friction() {
    let nre = reynolds(5.7, 3.0, 9.6, 1e-306).unwrap();
    assert_eq!(nre, f64::INFINITY);
    assert!(friction_factor(3.0, nre, 0.005).unwrap().is_nan());

    let nre = reynolds(5.7, 3.0, 9.6, 0.0).unwrap();
    assert!(friction_factor(3.0, nre, 0.005).unwrap().is_nan());
}

#[test]
fn parallel_calls_agree() {
    let expected = friction_factor(2.5, 30_000.0, 0.001).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| friction_factor(2.5, 30_000.0, 0.001).unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().to_bits(), expected.to_bits());
    }
}
