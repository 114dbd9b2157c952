//! Newtonian Reynolds number in field units.

use crate::common::{check_result, require_finite};
use crate::error::{HydraulicsError, HydraulicsResult};
use wh_core::units::field::REYNOLDS_FACTOR;

/// Reynolds number for a Newtonian fluid.
///
/// Velocity in ft/s, hydraulic diameter in inches, density in ppg, viscosity in cP.
/// A NaN or infinite velocity is an invalid value, so a recovered velocity
/// sentinel comes out of the guarded calculation as NaN.
pub fn reynolds_number(
    fluid_velocity: f64,
    hydraulic_diameter: f64,
    fluid_density: f64,
    fluid_viscosity: f64,
) -> HydraulicsResult<f64> {
    if !fluid_velocity.is_finite() {
        return Err(HydraulicsError::InvalidValue {
            what: "fluid velocity is not finite",
        });
    }
    let hydraulic_diameter = require_finite(hydraulic_diameter, "hydraulic diameter")?;
    let fluid_density = require_finite(fluid_density, "fluid density")?;
    let fluid_viscosity = require_finite(fluid_viscosity, "fluid viscosity")?;

    if fluid_viscosity == 0.0 {
        return Err(HydraulicsError::DivisionByZero {
            what: "fluid viscosity is zero",
        });
    }

    check_result(
        REYNOLDS_FACTOR * fluid_velocity * hydraulic_diameter * fluid_density / fluid_viscosity,
        "Reynolds number",
    )
}
