use crate::WhError;

/// Floating point type used for every hydraulic quantity.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WhError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WhError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`, the constraint on every raw field measurement.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, WhError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(WhError::InvalidArg { what });
    }
    Ok(v)
}

/// Infinity carrying the sign of `sign_source`.
///
/// Zero and positive values (including `+0.0`) map to `+inf`; only strictly
/// negative values map to `-inf`.
pub fn signed_infinity(sign_source: Real) -> Real {
    if sign_source < 0.0 {
        Real::NEG_INFINITY
    } else {
        Real::INFINITY
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn signed_infinity_follows_sign(x in -1e300f64..1e300) {
            let inf = signed_infinity(x);
            prop_assert!(inf.is_infinite());
            prop_assert_eq!(inf.is_sign_negative(), x < 0.0);
        }

        #[test]
        fn ensure_non_negative_rejects_negatives(x in -1e300f64..-1e-300) {
            prop_assert!(matches!(
                ensure_non_negative(x, "rate"),
                Err(WhError::InvalidArg { what: "rate" })
            ), "expected InvalidArg for negative rate");
        }

        #[test]
        fn ensure_non_negative_keeps_valid_values(x in 0.0f64..1e300) {
            prop_assert_eq!(ensure_non_negative(x, "rate").unwrap(), x);
        }
    }
}
