//! The three guarded entry points, with and without explicit configuration.

use crate::colebrook::ColebrookConfig;
use crate::error::HydraulicsResult;
use crate::friction::{FrictionFactor, fanning_friction};
use crate::guard::{RecoveryPolicy, guarded};
use crate::regime::FlowRegime;
use crate::reynolds::reynolds_number;
use crate::velocity::fluid_velocity;

/// Solver settings plus recovery policy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    pub solver: ColebrookConfig,
    pub recovery: RecoveryPolicy,
}

/// Guarded velocity, Reynolds number and friction factor.
///
/// Arithmetic failures come back as `Ok` sentinels (NaN or signed infinity) per
/// the configured [`RecoveryPolicy`]; argument errors and solver
/// non-convergence come back as `Err`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Fluid velocity (ft/s); see [`fluid_velocity`].
    pub fn velocity(
        &self,
        fluid_rate: f64,
        diameter: f64,
        inner_diameter: f64,
    ) -> HydraulicsResult<f64> {
        guarded("velocity", fluid_rate, &self.config.recovery, || {
            fluid_velocity(fluid_rate, diameter, inner_diameter)
        })
    }

    /// Reynolds number; see [`reynolds_number`].
    pub fn reynolds(
        &self,
        fluid_velocity: f64,
        hydraulic_diameter: f64,
        fluid_density: f64,
        fluid_viscosity: f64,
    ) -> HydraulicsResult<f64> {
        guarded("reynolds", fluid_velocity, &self.config.recovery, || {
            reynolds_number(
                fluid_velocity,
                hydraulic_diameter,
                fluid_density,
                fluid_viscosity,
            )
        })
    }

    /// Fanning friction factor; see [`fanning_friction`].
    pub fn friction_factor(
        &self,
        hydraulic_diameter: f64,
        reynolds_number: f64,
        roughness: f64,
    ) -> HydraulicsResult<f64> {
        guarded(
            "friction_factor",
            hydraulic_diameter,
            &self.config.recovery,
            || {
                fanning_friction(
                    hydraulic_diameter,
                    reynolds_number,
                    roughness,
                    &self.config.solver,
                )
                .map(|f| f.fanning)
            },
        )
    }

    /// Unguarded friction factor with regime and iteration count.
    pub fn friction_detail(
        &self,
        hydraulic_diameter: f64,
        reynolds_number: f64,
        roughness: f64,
    ) -> HydraulicsResult<FrictionFactor> {
        fanning_friction(
            hydraulic_diameter,
            reynolds_number,
            roughness,
            &self.config.solver,
        )
    }

    pub fn regime(&self, reynolds_number: f64) -> FlowRegime {
        FlowRegime::from_reynolds(reynolds_number)
    }
}

/// Guarded velocity with default configuration.
pub fn velocity(fluid_rate: f64, diameter: f64, inner_diameter: f64) -> HydraulicsResult<f64> {
    Calculator::default().velocity(fluid_rate, diameter, inner_diameter)
}

/// Guarded Reynolds number with default configuration.
pub fn reynolds(
    fluid_velocity: f64,
    hydraulic_diameter: f64,
    fluid_density: f64,
    fluid_viscosity: f64,
) -> HydraulicsResult<f64> {
    Calculator::default().reynolds(
        fluid_velocity,
        hydraulic_diameter,
        fluid_density,
        fluid_viscosity,
    )
}

/// Guarded friction factor with default configuration.
pub fn friction_factor(
    hydraulic_diameter: f64,
    reynolds_number: f64,
    roughness: f64,
) -> HydraulicsResult<f64> {
    Calculator::default().friction_factor(hydraulic_diameter, reynolds_number, roughness)
}
