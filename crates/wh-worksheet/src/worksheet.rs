//! Friction worksheet: velocity, then Reynolds number, then friction factor.

use crate::WorksheetResult;
use crate::schema::{WorksheetCase, WorksheetInputs};
use crate::validate::{validate_case, validate_inputs};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};
use wh_hydraulics::{Calculator, FlowRegime, ReynoldsSweep, SweepPoint, friction_sweep};

/// Worksheet results, possibly holding NaN/infinite sentinels for recovered faults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorksheetReport {
    /// Mean velocity (ft/s)
    pub velocity: f64,
    /// Hydraulic diameter (in)
    pub hydraulic_diameter: f64,
    /// Reynolds number
    pub reynolds: f64,
    /// `None` when the Reynolds number is not a finite value
    pub regime: Option<FlowRegime>,
    /// Fanning friction factor
    pub fanning: f64,
    /// Darcy friction factor
    pub darcy: f64,
}

impl WorksheetReport {
    pub fn velocity_line(&self) -> String {
        format!("Fluid Velocity {:.2} ft/s", self.velocity)
    }

    pub fn reynolds_line(&self) -> String {
        format!("Reynold's Number {:.0}.", self.reynolds)
    }

    pub fn regime_line(&self) -> String {
        match self.regime {
            Some(regime) => format!("Flow is {regime}."),
            None => "Flow is undetermined.".to_string(),
        }
    }

    pub fn friction_line(&self) -> String {
        format!("FF {:.5}", self.fanning)
    }
}

impl fmt::Display for WorksheetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.velocity_line())?;
        writeln!(f, "{}", self.reynolds_line())?;
        writeln!(f, "{}", self.regime_line())?;
        write!(f, "{}", self.friction_line())
    }
}

/// Run the worksheet pipeline.
///
/// Recovered arithmetic faults flow through as sentinels; argument errors and
/// solver non-convergence abort with an error.
pub fn solve_worksheet(
    inputs: &WorksheetInputs,
    calculator: &Calculator,
) -> WorksheetResult<WorksheetReport> {
    validate_inputs(inputs)?;

    let velocity = calculator.velocity(inputs.fluid_rate, inputs.diameter, inputs.inner_diameter)?;
    let hydraulic_diameter = inputs.hydraulic_diameter();
    let reynolds = calculator.reynolds(
        velocity,
        hydraulic_diameter,
        inputs.fluid_density,
        inputs.fluid_viscosity,
    )?;

    let regime = reynolds
        .is_finite()
        .then(|| calculator.regime(reynolds));

    if regime.is_none() {
        debug!(reynolds, "Reynolds number is a sentinel; friction factor will be NaN");
    }
    let fanning = calculator.friction_factor(hydraulic_diameter, reynolds, inputs.roughness)?;

    Ok(WorksheetReport {
        velocity,
        hydraulic_diameter,
        reynolds,
        regime,
        fanning,
        darcy: 4.0 * fanning,
    })
}

/// Outcome of a full case run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseOutcome {
    pub name: String,
    pub report: WorksheetReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<Vec<SweepPoint>>,
}

pub fn run_case(case: &WorksheetCase) -> WorksheetResult<CaseOutcome> {
    validate_case(case)?;
    let calculator = Calculator::new(case.calculator);

    info!(case = %case.name, "running worksheet");
    let report = solve_worksheet(&case.inputs, &calculator)?;

    let sweep = match &case.sweep {
        Some(def) => {
            let sweep = ReynoldsSweep::new(def.start, def.end, def.num_points, def.spacing)?;
            let rows = friction_sweep(
                &calculator,
                &sweep,
                case.inputs.hydraulic_diameter(),
                case.inputs.roughness,
            )?;
            Some(rows)
        }
        None => None,
    };

    Ok(CaseOutcome {
        name: case.name.clone(),
        report,
        sweep,
    })
}
