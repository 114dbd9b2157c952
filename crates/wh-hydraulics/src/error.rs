//! Error types for hydraulic calculations.

use std::fmt;
use thiserror::Error;
use wh_core::error::WhError;

/// Errors that can occur during a hydraulic calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    #[error("Invalid value: {what}")]
    InvalidValue { what: &'static str },

    #[error("Invalid argument {what}: {value}")]
    InvalidArgument { what: &'static str, value: f64 },

    #[error("Overflow: {what}")]
    Overflow { what: &'static str },

    #[error("Convergence failed after {iterations} iterations: {what}")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
    },

    #[error("Unexpected failure: {message}")]
    Unexpected { message: String },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

/// Coarse failure category used to pick a recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    DivisionByZero,
    InvalidValue,
    InvalidArgument,
    Overflow,
    /// Anything else, including solver non-convergence.
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::Overflow => write!(f, "overflow"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl HydraulicsError {
    pub fn kind(&self) -> FailureKind {
        match self {
            HydraulicsError::DivisionByZero { .. } => FailureKind::DivisionByZero,
            HydraulicsError::InvalidValue { .. } => FailureKind::InvalidValue,
            HydraulicsError::InvalidArgument { .. } => FailureKind::InvalidArgument,
            HydraulicsError::Overflow { .. } => FailureKind::Overflow,
            HydraulicsError::ConvergenceFailed { .. } | HydraulicsError::Unexpected { .. } => {
                FailureKind::Other
            }
        }
    }

    /// True when the iterative solver gave up rather than hitting an arithmetic fault.
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, HydraulicsError::ConvergenceFailed { .. })
    }
}

impl From<WhError> for HydraulicsError {
    fn from(e: WhError) -> Self {
        match e {
            WhError::NonFinite { what, value } => HydraulicsError::InvalidArgument { what, value },
            WhError::InvalidArg { what } => HydraulicsError::InvalidArgument {
                what,
                value: f64::NAN,
            },
            WhError::Invariant { what } => HydraulicsError::Unexpected {
                message: what.to_string(),
            },
        }
    }
}

impl From<HydraulicsError> for WhError {
    fn from(e: HydraulicsError) -> Self {
        match e {
            HydraulicsError::DivisionByZero { what } => WhError::InvalidArg { what },
            HydraulicsError::InvalidValue { what } => WhError::InvalidArg { what },
            HydraulicsError::InvalidArgument { what, value } => WhError::NonFinite { what, value },
            HydraulicsError::Overflow { what } => WhError::NonFinite {
                what,
                value: f64::INFINITY,
            },
            HydraulicsError::ConvergenceFailed { what, .. } => WhError::Invariant { what },
            HydraulicsError::Unexpected { message: _ } => WhError::Invariant {
                what: "unexpected hydraulics failure",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HydraulicsError::DivisionByZero {
            what: "fluid viscosity",
        };
        assert!(err.to_string().contains("fluid viscosity"));

        let err = HydraulicsError::ConvergenceFailed {
            what: "iteration limit reached",
            iterations: 100,
        };
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn kinds_are_distinct_for_zero_division_and_non_convergence() {
        let div = HydraulicsError::DivisionByZero { what: "x" };
        let conv = HydraulicsError::ConvergenceFailed {
            what: "x",
            iterations: 3,
        };
        assert_ne!(div.kind(), conv.kind());
        assert!(conv.is_non_convergence());
        assert!(!div.is_non_convergence());
    }

    #[test]
    fn error_conversion() {
        let err = HydraulicsError::ConvergenceFailed {
            what: "test",
            iterations: 1,
        };
        let wh_err: WhError = err.into();
        assert!(matches!(wh_err, WhError::Invariant { .. }));

        let back: HydraulicsError = WhError::NonFinite {
            what: "rate",
            value: f64::NAN,
        }
        .into();
        assert_eq!(back.kind(), FailureKind::InvalidArgument);
    }
}
