use thiserror::Error;

pub type WhResult<T> = Result<T, WhError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WhError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
