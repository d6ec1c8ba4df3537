use cvt_core::{Value, indirect};

use crate::error::{Cause, ConvertError, Limit};
use crate::num::float_of;

/// Convert to `f64`.
///
/// `f32` sources widen through their shortest decimal text, durations count
/// nanoseconds, text uses the standard float grammar.
pub fn to_float64(val: &Value) -> Result<f64, ConvertError> {
    let (v, _) = indirect(val);
    float_of(v).map_err(|cause| ConvertError::new(val, "float64", cause))
}

/// Convert to `f32`. Finite magnitudes above `f32::MAX` are out of range.
pub fn to_float32(val: &Value) -> Result<f32, ConvertError> {
    let (v, _) = indirect(val);
    if let Value::F32(x) = v {
        return Ok(*x);
    }

    let x = float_of(v).map_err(|cause| ConvertError::new(val, "float32", cause))?;
    if x.abs() > f64::from(f32::MAX) {
        return Err(ConvertError::new(
            val,
            "float32",
            Cause::OutOfRange {
                limit: Limit::Float(f64::from(f32::MAX)),
            },
        ));
    }
    Ok(x as f32)
}
