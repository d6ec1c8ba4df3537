//! Numeric intermediates shared by the scalar converters.
//!
//! Integers go through a 128-bit intermediate so that every 64-bit source
//! (signed or unsigned) and every truncated float up to ~1.7e38 is exact
//! before the per-target range check.

use cvt_core::Value;
use cvt_core::model::duration_nanos;

use crate::error::Cause;

/// A whole number plus the sign of the source it came from.
///
/// `negative` is kept separately because truncation loses it: `-0.5`
/// truncates to `0` but is still a negative source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Whole {
    pub value: i128,
    pub negative: bool,
}

impl Whole {
    fn exact(value: i128) -> Self {
        Self {
            value,
            negative: value < 0,
        }
    }
}

/// Integer view of a canonical value.
pub(crate) fn whole_of(v: &Value) -> Result<Whole, Cause> {
    let w = match v {
        Value::Null => Whole::exact(0),
        Value::Bool(b) => Whole::exact(i128::from(*b)),
        Value::I8(n) => Whole::exact(i128::from(*n)),
        Value::I16(n) => Whole::exact(i128::from(*n)),
        Value::I32(n) => Whole::exact(i128::from(*n)),
        Value::I64(n) => Whole::exact(i128::from(*n)),
        Value::Isize(n) => Whole::exact(*n as i128),
        Value::U8(n) => Whole::exact(i128::from(*n)),
        Value::U16(n) => Whole::exact(i128::from(*n)),
        Value::U32(n) => Whole::exact(i128::from(*n)),
        Value::U64(n) => Whole::exact(i128::from(*n)),
        Value::Usize(n) => Whole::exact(*n as i128),
        Value::Char(c) => Whole::exact(i128::from(u32::from(*c))),
        Value::F32(x) => truncate(f64::from(*x))?,
        Value::F64(x) => truncate(*x)?,
        Value::Str(s) => parse_whole(s)?,
        Value::Bytes(b) => parse_whole(utf8(b)?)?,
        Value::Duration(d) => Whole::exact(duration_nanos(d)),
        _ => return Err(Cause::ConversionFail),
    };
    Ok(w)
}

/// Float view of a canonical value.
pub(crate) fn float_of(v: &Value) -> Result<f64, Cause> {
    let x = match v {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::I8(n) => f64::from(*n),
        Value::I16(n) => f64::from(*n),
        Value::I32(n) => f64::from(*n),
        Value::I64(n) => *n as f64,
        Value::Isize(n) => *n as f64,
        Value::U8(n) => f64::from(*n),
        Value::U16(n) => f64::from(*n),
        Value::U32(n) => f64::from(*n),
        Value::U64(n) => *n as f64,
        Value::Usize(n) => *n as f64,
        Value::Char(c) => f64::from(u32::from(*c)),
        Value::F32(x) => widen_f32(*x),
        Value::F64(x) => *x,
        Value::Str(s) => parse_float(s)?,
        Value::Bytes(b) => parse_float(utf8(b)?)?,
        Value::Duration(d) => duration_nanos(d) as f64,
        _ => return Err(Cause::ConversionFail),
    };
    Ok(x)
}

/// Widen through the shortest decimal text of the 32-bit value.
///
/// `8.31f32` becomes `8.31`, not `8.3100004196167`.
pub(crate) fn widen_f32(x: f32) -> f64 {
    x.to_string().parse::<f64>().unwrap_or(f64::from(x))
}

pub(crate) fn parse_float(s: &str) -> Result<f64, Cause> {
    s.parse::<f64>().map_err(|_| Cause::ConversionFail)
}

/// Parse integer or float text, truncating toward zero.
///
/// "12" => 12, "12.99" => 12, "-12.99" => -12, "1.5e3" => 1500
///
/// The text must satisfy the float grammar. Without an exponent, the digits
/// before the decimal point are then parsed exactly when possible, so large
/// integral text does not lose precision through `f64`.
pub(crate) fn parse_whole(s: &str) -> Result<Whole, Cause> {
    let x = parse_float(s)?;
    let negative = x < 0.0;

    if !s.contains(['e', 'E']) {
        let int_part = s.split_once('.').map_or(s, |(head, _)| head);
        if let Ok(value) = int_part.parse::<i128>() {
            return Ok(Whole { value, negative });
        }
    }

    let mut w = truncate(x)?;
    w.negative = negative;
    Ok(w)
}

/// Truncate toward zero. Out-of-range magnitudes saturate, so the target's
/// range check reports them.
pub(crate) fn truncate(x: f64) -> Result<Whole, Cause> {
    if x.is_nan() {
        return Err(Cause::ConversionFail);
    }
    Ok(Whole {
        value: x.trunc() as i128,
        negative: x < 0.0,
    })
}

pub(crate) fn utf8(b: &[u8]) -> Result<&str, Cause> {
    std::str::from_utf8(b).map_err(|_| Cause::ConversionFail)
}
