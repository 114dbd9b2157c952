//! Fanning friction factor: laminar closed form, Colebrook-White when turbulent.

use crate::colebrook::{ColebrookConfig, solve_colebrook};
use crate::common::{check_result, require_finite};
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::regime::FlowRegime;

/// Laminar Fanning friction: `f = LAMINAR_COEFFICIENT / NRe`.
pub const LAMINAR_COEFFICIENT: f64 = 16.0;

/// Friction factor together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrictionFactor {
    /// Fanning friction factor
    pub fanning: f64,
    /// Regime branch that produced it
    pub regime: FlowRegime,
    /// Solver iterations (0 for the laminar closed form)
    pub iterations: usize,
}

impl FrictionFactor {
    /// Darcy-Weisbach friction factor (four times Fanning).
    pub fn darcy(&self) -> f64 {
        4.0 * self.fanning
    }
}

/// Fanning friction factor for the given hydraulic diameter (in), Reynolds
/// number and absolute roughness (in).
///
/// The hydraulic diameter only matters in the turbulent branch, where it turns
/// roughness into relative roughness; a zero diameter there is a division by zero.
///
/// A NaN or infinite Reynolds number is an invalid value rather than an invalid
/// argument: it is what a recovered Reynolds calculation hands downstream.
pub fn fanning_friction(
    hydraulic_diameter: f64,
    reynolds: f64,
    roughness: f64,
    config: &ColebrookConfig,
) -> HydraulicsResult<FrictionFactor> {
    let hydraulic_diameter = require_finite(hydraulic_diameter, "hydraulic diameter")?;
    let roughness = require_finite(roughness, "roughness")?;
    if !reynolds.is_finite() {
        return Err(HydraulicsError::InvalidValue {
            what: "Reynolds number is not finite",
        });
    }

    match FlowRegime::from_reynolds(reynolds) {
        FlowRegime::Laminar => {
            if reynolds == 0.0 {
                return Err(HydraulicsError::DivisionByZero {
                    what: "Reynolds number is zero",
                });
            }
            let fanning = check_result(LAMINAR_COEFFICIENT / reynolds, "laminar friction factor")?;
            Ok(FrictionFactor {
                fanning,
                regime: FlowRegime::Laminar,
                iterations: 0,
            })
        }
        FlowRegime::Turbulent => {
            if hydraulic_diameter == 0.0 {
                return Err(HydraulicsError::DivisionByZero {
                    what: "relative roughness with zero hydraulic diameter",
                });
            }
            let relative_roughness =
                check_result(roughness / hydraulic_diameter, "relative roughness")?;
            let solution = solve_colebrook(relative_roughness, reynolds, config)?;
            Ok(FrictionFactor {
                fanning: solution.friction,
                regime: FlowRegime::Turbulent,
                iterations: solution.iterations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friction(d: f64, nre: f64, r: f64) -> HydraulicsResult<FrictionFactor> {
        fanning_friction(d, nre, r, &ColebrookConfig::default())
    }

    #[test]
    fn laminar_is_exact() {
        let f = friction(3.0, 1000.0, 0.005).unwrap();
        assert_eq!(f.fanning, 0.016);
        assert_eq!(f.regime, FlowRegime::Laminar);
        assert_eq!(f.iterations, 0);
        assert_eq!(f.darcy(), 0.064);
    }

    #[test]
    fn boundary_switches_branch() {
        let below = friction(3.0, 2099.999, 0.005).unwrap();
        assert_eq!(below.fanning, 16.0 / 2099.999);
        assert_eq!(below.regime, FlowRegime::Laminar);

        let at = friction(3.0, 2100.0, 0.005).unwrap();
        assert_eq!(at.regime, FlowRegime::Turbulent);
        assert!(at.iterations > 0);
        assert!((at.fanning - 16.0 / 2100.0).abs() > 1e-3);
    }

    #[test]
    fn turbulent_in_plausible_range() {
        let f = friction(3.0, 100_000.0, 0.005).unwrap();
        assert!(f.fanning > 0.003 && f.fanning < 0.02, "{}", f.fanning);
        assert!((f.fanning - 0.006_052_7).abs() < 1e-6);
    }

    #[test]
    fn laminar_ignores_zero_diameter() {
        let f = friction(0.0, 500.0, 0.005).unwrap();
        assert_eq!(f.fanning, 16.0 / 500.0);
    }

    #[test]
    fn turbulent_zero_diameter_is_division_by_zero() {
        assert!(matches!(
            friction(0.0, 10_000.0, 0.005),
            Err(HydraulicsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn zero_reynolds_is_division_by_zero() {
        assert!(matches!(
            friction(3.0, 0.0, 0.005),
            Err(HydraulicsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn non_finite_reynolds_is_invalid_value() {
        for nre in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                friction(3.0, nre, 0.005),
                Err(HydraulicsError::InvalidValue { .. })
            ));
        }
        assert!(matches!(
            friction(f64::NAN, 5000.0, 0.005),
            Err(HydraulicsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn rougher_pipe_has_more_friction() {
        let smooth = friction(3.0, 50_000.0, 0.0).unwrap().fanning;
        let rough = friction(3.0, 50_000.0, 0.01).unwrap().fanning;
        assert!(rough > smooth);
    }
}
