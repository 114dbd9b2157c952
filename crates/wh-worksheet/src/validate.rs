//! Case and input validation.

use crate::schema::{LATEST_VERSION, WorksheetCase, WorksheetInputs};
use wh_core::numeric::ensure_non_negative;
use wh_hydraulics::ReynoldsSweep;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Every measurement must be a finite number `>= 0`, and the inner diameter may
/// not exceed the outer one.
pub fn validate_inputs(inputs: &WorksheetInputs) -> Result<(), ValidationError> {
    let fields = [
        ("fluid_rate", inputs.fluid_rate),
        ("diameter", inputs.diameter),
        ("inner_diameter", inputs.inner_diameter),
        ("fluid_density", inputs.fluid_density),
        ("fluid_viscosity", inputs.fluid_viscosity),
        ("roughness", inputs.roughness),
    ];

    for (field, value) in fields {
        ensure_non_negative(value, field).map_err(|e| ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })?;
    }

    if inputs.inner_diameter > inputs.diameter {
        return Err(ValidationError::InvalidValue {
            field: "inner_diameter".to_string(),
            value: inputs.inner_diameter.to_string(),
            reason: format!("exceeds diameter {}", inputs.diameter),
        });
    }

    Ok(())
}

pub fn validate_case(case: &WorksheetCase) -> Result<(), ValidationError> {
    if case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: String::new(),
            reason: "must not be empty".to_string(),
        });
    }

    validate_inputs(&case.inputs)?;

    case.calculator
        .solver
        .validate()
        .map_err(|e| ValidationError::InvalidValue {
            field: "calculator.solver".to_string(),
            value: format!("{:?}", case.calculator.solver),
            reason: e.to_string(),
        })?;

    if let Some(sweep) = &case.sweep {
        ReynoldsSweep::new(sweep.start, sweep.end, sweep.num_points, sweep.spacing).map_err(
            |e| ValidationError::InvalidValue {
                field: "sweep".to_string(),
                value: format!("{}..{} ({} points)", sweep.start, sweep.end, sweep.num_points),
                reason: e.to_string(),
            },
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wh_hydraulics::SweepSpacing;

    #[test]
    fn defaults_are_valid() {
        validate_inputs(&WorksheetInputs::default()).unwrap();
        validate_case(&WorksheetCase::new("defaults", WorksheetInputs::default())).unwrap();
    }

    #[test]
    fn negative_rate_rejected() {
        let inputs = WorksheetInputs {
            fluid_rate: -1.0,
            ..WorksheetInputs::default()
        };
        let err = validate_inputs(&inputs).unwrap_err();
        assert!(err.to_string().contains("fluid_rate"));
    }

    #[test]
    fn nan_density_rejected() {
        let inputs = WorksheetInputs {
            fluid_density: f64::NAN,
            ..WorksheetInputs::default()
        };
        assert!(validate_inputs(&inputs).is_err());
    }

    #[test]
    fn inner_larger_than_outer_rejected() {
        let inputs = WorksheetInputs {
            diameter: 4.0,
            inner_diameter: 5.0,
            ..WorksheetInputs::default()
        };
        let err = validate_inputs(&inputs).unwrap_err();
        assert!(err.to_string().contains("inner_diameter"));
    }

    #[test]
    fn zero_viscosity_is_allowed() {
        // The calculation recovers it to NaN; it is not a validation failure.
        let inputs = WorksheetInputs {
            fluid_viscosity: 0.0,
            ..WorksheetInputs::default()
        };
        validate_inputs(&inputs).unwrap();
    }

    #[test]
    fn future_version_rejected() {
        let mut case = WorksheetCase::new("future", WorksheetInputs::default());
        case.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_case(&case),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn bad_sweep_rejected() {
        let mut case = WorksheetCase::new("sweep", WorksheetInputs::default());
        case.sweep = Some(ReynoldsSweep {
            start: 1000.0,
            end: 1000.0,
            num_points: 10,
            spacing: SweepSpacing::Linear,
        });
        let err = validate_case(&case).unwrap_err();
        assert!(err.to_string().contains("sweep"));
    }

    #[test]
    fn bad_solver_rejected() {
        let mut case = WorksheetCase::new("solver", WorksheetInputs::default());
        case.calculator.solver.max_iterations = 0;
        assert!(validate_case(&case).is_err());
    }
}
