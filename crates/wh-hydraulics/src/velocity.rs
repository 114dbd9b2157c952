//! Mean fluid velocity through a pipe or concentric annulus.

use crate::common::{check_result, require_finite};
use crate::error::HydraulicsResult;
use std::f64::consts::PI;
use wh_core::units::field::VELOCITY_FACTOR;

/// Mean velocity (ft/s) of `fluid_rate` (bbl/min) through the annulus between
/// `diameter` and `inner_diameter` (in).
///
/// Pass `inner_diameter = 0` for a plain pipe. The two diameters may be given in
/// either order; a zero annular area yields exactly `0` rather than an error.
pub fn fluid_velocity(
    fluid_rate: f64,
    diameter: f64,
    inner_diameter: f64,
) -> HydraulicsResult<f64> {
    let fluid_rate = require_finite(fluid_rate, "fluid rate")?;
    let diameter = require_finite(diameter, "diameter")?;
    let inner_diameter = require_finite(inner_diameter, "inner diameter")?;

    let outer_sq = check_result(diameter.powi(2), "diameter squared")?;
    let inner_sq = check_result(inner_diameter.powi(2), "inner diameter squared")?;
    let area_term = outer_sq - inner_sq;

    if area_term == 0.0 {
        return Ok(0.0);
    }

    check_result(
        VELOCITY_FACTOR * 4.0 * fluid_rate / PI / area_term,
        "fluid velocity",
    )
}

/// Velocity through a full-bore pipe.
pub fn pipe_velocity(fluid_rate: f64, diameter: f64) -> HydraulicsResult<f64> {
    fluid_velocity(fluid_rate, diameter, 0.0)
}
