//! Failure recovery applied uniformly to the hydraulic calculations.
//!
//! Arithmetic faults turn into sentinel values so a caller can keep going with a
//! visibly invalid number. Contract violations and anything unexpected are
//! logged and handed back as errors.

use crate::error::{FailureKind, HydraulicsError, HydraulicsResult};
use tracing::{error, warn};
use wh_core::numeric::signed_infinity;

/// What to do with a failed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Recovery {
    /// Return NaN
    NotANumber,
    /// Return an infinity signed like the first argument
    SignedInfinity,
    /// Return the error to the caller
    Propagate,
}

/// Recovery action per recoverable failure kind.
///
/// Invalid arguments and unexpected failures always propagate and are not
/// configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecoveryPolicy {
    pub division_by_zero: Recovery,
    pub invalid_value: Recovery,
    pub overflow: Recovery,
}

impl Default for RecoveryPolicy {
    fn default() -> Self {
        Self {
            division_by_zero: Recovery::NotANumber,
            invalid_value: Recovery::NotANumber,
            overflow: Recovery::SignedInfinity,
        }
    }
}

impl RecoveryPolicy {
    /// Propagate every failure.
    pub fn strict() -> Self {
        Self {
            division_by_zero: Recovery::Propagate,
            invalid_value: Recovery::Propagate,
            overflow: Recovery::Propagate,
        }
    }

    pub fn action(&self, kind: FailureKind) -> Recovery {
        match kind {
            FailureKind::DivisionByZero => self.division_by_zero,
            FailureKind::InvalidValue => self.invalid_value,
            FailureKind::Overflow => self.overflow,
            FailureKind::InvalidArgument | FailureKind::Other => Recovery::Propagate,
        }
    }
}

/// Run `calc` under `policy`.
///
/// `sign_source` is the calculation's first argument; it only picks the sign of
/// an overflow sentinel, which is a heuristic and not guaranteed to match the
/// sign of the true result.
pub fn guarded<F>(
    calculation: &'static str,
    sign_source: f64,
    policy: &RecoveryPolicy,
    calc: F,
) -> HydraulicsResult<f64>
where
    F: FnOnce() -> HydraulicsResult<f64>,
{
    let err = match calc() {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    let kind = err.kind();
    match policy.action(kind) {
        Recovery::NotANumber => {
            warn!(calculation, %kind, error = %err, "returning NaN");
            Ok(f64::NAN)
        }
        Recovery::SignedInfinity => {
            let value = signed_infinity(sign_source);
            warn!(calculation, %kind, error = %err, value, "value too large");
            Ok(value)
        }
        Recovery::Propagate => {
            log_propagated(calculation, &err);
            Err(err)
        }
    }
}

fn log_propagated(calculation: &'static str, err: &HydraulicsError) {
    match err.kind() {
        FailureKind::InvalidArgument => {
            error!(calculation, error = %err, "check input values");
        }
        FailureKind::Other => {
            error!(calculation, error = %err, "unexpected failure");
        }
        kind => {
            error!(calculation, %kind, error = %err, "failure propagated by policy");
        }
    }
}
