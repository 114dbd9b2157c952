//! Case file schema.

use serde::{Deserialize, Serialize};
use wh_hydraulics::{CalculatorConfig, ReynoldsSweep};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorksheetCase {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub inputs: WorksheetInputs,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<ReynoldsSweep>,
}

impl WorksheetCase {
    pub fn new(name: impl Into<String>, inputs: WorksheetInputs) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            inputs,
            calculator: CalculatorConfig::default(),
            sweep: None,
        }
    }
}

/// Raw worksheet measurements in field units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorksheetInputs {
    /// Flow rate (bbl/min)
    pub fluid_rate: f64,
    /// Outer diameter (in)
    pub diameter: f64,
    /// Concentric inner diameter (in), 0 for a pipe
    pub inner_diameter: f64,
    /// Fluid density (ppg)
    pub fluid_density: f64,
    /// Fluid viscosity (cP)
    pub fluid_viscosity: f64,
    /// Absolute wall roughness (in)
    pub roughness: f64,
}

impl Default for WorksheetInputs {
    fn default() -> Self {
        Self {
            fluid_rate: 3.0,
            diameter: 3.0,
            inner_diameter: 0.0,
            fluid_density: 9.6,
            fluid_viscosity: 2.1,
            roughness: 0.005,
        }
    }
}

impl WorksheetInputs {
    /// Concentric annulus hydraulic diameter (in).
    pub fn hydraulic_diameter(&self) -> f64 {
        self.diameter - self.inner_diameter
    }
}
