//! Newton solver for the Fanning form of the Colebrook-White equation.
//!
//! Solves for `f` in
//!
//! ```text
//! 1/sqrt(f) + 4 log10(e/3.7065 + 1.2613/(NRe sqrt(f))) = 0
//! ```
//!
//! with the slope taken from a forward finite difference instead of the
//! analytic derivative.

use crate::common::require_finite;
use crate::error::{HydraulicsError, HydraulicsResult};
use tracing::{debug, trace};

/// Relative-roughness divisor of the Fanning Colebrook form.
pub const ROUGHNESS_DIVISOR: f64 = 3.7065;

/// Viscous-term coefficient of the Fanning Colebrook form.
pub const VISCOUS_COEFFICIENT: f64 = 1.2613;

/// Colebrook solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColebrookConfig {
    /// Starting friction factor
    pub initial_guess: f64,
    /// Finite-difference step for the slope estimate
    pub fd_step: f64,
    /// Stop once successive iterates differ by less than this
    pub tolerance: f64,
    /// Maximum iterations before reporting non-convergence
    pub max_iterations: usize,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.00001,
            fd_step: 0.000005,
            tolerance: 0.000000001,
            max_iterations: 100,
        }
    }
}

impl ColebrookConfig {
    pub fn validate(&self) -> HydraulicsResult<()> {
        for (value, what) in [
            (self.initial_guess, "solver initial guess"),
            (self.fd_step, "solver finite-difference step"),
            (self.tolerance, "solver tolerance"),
        ] {
            if !(require_finite(value, what)? > 0.0) {
                return Err(HydraulicsError::InvalidArgument { what, value });
            }
        }
        if self.max_iterations == 0 {
            return Err(HydraulicsError::InvalidArgument {
                what: "solver max iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Converged Colebrook solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookSolution {
    /// Fanning friction factor
    pub friction: f64,
    /// Number of Newton updates performed
    pub iterations: usize,
    /// Size of the final update
    pub last_step: f64,
}

/// Colebrook residual at friction factor `f`.
///
/// A non-positive logarithm argument (possible with negative roughness) is an
/// invalid value.
pub fn colebrook_residual(f: f64, relative_roughness: f64, reynolds: f64) -> HydraulicsResult<f64> {
    let sqrt_f = f.sqrt();
    let log_arg = relative_roughness / ROUGHNESS_DIVISOR + VISCOUS_COEFFICIENT / (reynolds * sqrt_f);
    if !(log_arg > 0.0) {
        return Err(HydraulicsError::InvalidValue {
            what: "non-positive logarithm argument in Colebrook residual",
        });
    }
    Ok(1.0 / sqrt_f + 4.0 * log_arg.log10())
}

/// Solve the Colebrook equation for the Fanning friction factor.
///
/// Fails with [`HydraulicsError::ConvergenceFailed`] when the slope estimate
/// vanishes, when an iterate leaves the positive finite range, or when
/// `max_iterations` updates pass without meeting the tolerance.
pub fn solve_colebrook(
    relative_roughness: f64,
    reynolds: f64,
    config: &ColebrookConfig,
) -> HydraulicsResult<ColebrookSolution> {
    config.validate()?;

    let mut f0 = config.initial_guess;

    for iteration in 1..=config.max_iterations {
        let r0 = colebrook_residual(f0, relative_roughness, reynolds)?;
        let r1 = colebrook_residual(f0 + config.fd_step, relative_roughness, reynolds)?;
        let slope = (r1 - r0) / config.fd_step;

        if slope == 0.0 || !slope.is_finite() {
            debug!(iteration, f = f0, slope, "colebrook slope degenerate");
            return Err(HydraulicsError::ConvergenceFailed {
                what: "finite-difference slope vanished",
                iterations: iteration,
            });
        }

        let f1 = f0 - r0 / slope;
        let step = (f1 - f0).abs();
        trace!(iteration, f = f1, step, "colebrook iteration");

        if !(f1.is_finite() && f1 > 0.0) {
            debug!(iteration, f = f1, "colebrook iterate diverged");
            return Err(HydraulicsError::ConvergenceFailed {
                what: "iterate left the positive domain",
                iterations: iteration,
            });
        }

        if step < config.tolerance {
            return Ok(ColebrookSolution {
                friction: f1,
                iterations: iteration,
                last_step: step,
            });
        }

        f0 = f1;
    }

    Err(HydraulicsError::ConvergenceFailed {
        what: "iteration limit reached",
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_vanishes_at_solution() {
        let sol = solve_colebrook(0.005 / 3.0, 100_000.0, &ColebrookConfig::default()).unwrap();
        let r = colebrook_residual(sol.friction, 0.005 / 3.0, 100_000.0).unwrap();
        assert!(r.abs() < 1e-5, "residual {r}");
    }

    #[test]
    fn smooth_pipe_converges_quickly() {
        let sol = solve_colebrook(0.0, 100_000.0, &ColebrookConfig::default()).unwrap();
        assert!(sol.iterations < 20);
        assert!(sol.friction > 0.004 && sol.friction < 0.005);
        assert!(sol.last_step < 1e-9);
    }

    #[test]
    fn iteration_cap_is_reported() {
        let config = ColebrookConfig {
            max_iterations: 2,
            ..ColebrookConfig::default()
        };
        let err = solve_colebrook(0.001, 100_000.0, &config).unwrap_err();
        assert_eq!(
            err,
            HydraulicsError::ConvergenceFailed {
                what: "iteration limit reached",
                iterations: 2,
            }
        );
    }

    #[test]
    fn huge_roughness_flattens_slope() {
        // The roughness term swamps 1/sqrt(f): no root exists and the iterates run
        // away until the finite difference is exactly zero.
        let err = solve_colebrook(1e300 / 3.0, 100_000.0, &ColebrookConfig::default())
            .unwrap_err();
        assert!(err.is_non_convergence(), "{err:?}");
    }

    #[test]
    fn huge_reynolds_overshoots_domain() {
        let err = solve_colebrook(0.0, 1e300, &ColebrookConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            HydraulicsError::ConvergenceFailed {
                what: "iterate left the positive domain",
                iterations: 1,
            }
        ));
    }

    #[test]
    fn negative_roughness_can_hit_log_domain() {
        let err = solve_colebrook(-1.0, 100_000.0, &ColebrookConfig::default()).unwrap_err();
        assert!(matches!(err, HydraulicsError::InvalidValue { .. }));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = ColebrookConfig {
            fd_step: 0.0,
            ..ColebrookConfig::default()
        };
        assert!(matches!(
            solve_colebrook(0.001, 1e5, &config),
            Err(HydraulicsError::InvalidArgument { .. })
        ));

        let config = ColebrookConfig {
            max_iterations: 0,
            ..ColebrookConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
