//! Common checks shared by the calculations.

use crate::error::{HydraulicsError, HydraulicsResult};
use wh_core::numeric::ensure_finite;

/// Reject an input that is not a usable number (NaN or infinite).
pub fn require_finite(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    ensure_finite(value, what).map_err(|_| HydraulicsError::InvalidArgument { what, value })
}

/// Classify a computed value: NaN is an invalid value, infinity an overflow.
pub fn check_result(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    if value.is_nan() {
        Err(HydraulicsError::InvalidValue { what })
    } else if value.is_infinite() {
        Err(HydraulicsError::Overflow { what })
    } else {
        Ok(value)
    }
}
