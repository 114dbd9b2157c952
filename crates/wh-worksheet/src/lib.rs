//! wh-worksheet: the friction worksheet pipeline and its case file format.
//!
//! A worksheet takes raw field measurements, runs velocity, Reynolds number and
//! friction factor in sequence, and reports the results the way the worksheet
//! displays them. Case files bundle worksheet inputs with calculator settings
//! and an optional Reynolds sweep.

pub mod schema;
pub mod validate;
pub mod worksheet;

pub use schema::*;
pub use validate::{ValidationError, validate_case, validate_inputs};
pub use worksheet::{CaseOutcome, WorksheetReport, run_case, solve_worksheet};

pub type WorksheetResult<T> = Result<T, WorksheetError>;

#[derive(thiserror::Error, Debug)]
pub enum WorksheetError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation error: {0}")]
    Hydraulics(#[from] wh_hydraulics::HydraulicsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> WorksheetResult<WorksheetCase> {
    let content = std::fs::read_to_string(path)?;
    let case: WorksheetCase = serde_yaml::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &std::path::Path, case: &WorksheetCase) -> WorksheetResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> WorksheetResult<WorksheetCase> {
    let content = std::fs::read_to_string(path)?;
    let case: WorksheetCase = serde_json::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_json(path: &std::path::Path, case: &WorksheetCase) -> WorksheetResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a case by file extension (`.json` is JSON, anything else YAML).
pub fn load_case(path: &std::path::Path) -> WorksheetResult<WorksheetCase> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
