use cvt_core::model::duration_nanos;
use cvt_core::{Value, indirect};

use crate::error::ConvertError;
use crate::num::utf8;

const TARGET: &str = "bool";

/// Convert to `bool`.
///
/// - nil => `false`
/// - numbers => non-zero
/// - text => `true`/`false`/`t`/`f`/`1`/`0` (any case), then any float
///   literal compared to zero, then `on`/`off`
/// - sequences and mappings => non-empty
pub fn to_bool(val: &Value) -> Result<bool, ConvertError> {
    let (v, _) = indirect(val);
    let b = match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::I8(n) => *n != 0,
        Value::I16(n) => *n != 0,
        Value::I32(n) => *n != 0,
        Value::I64(n) => *n != 0,
        Value::Isize(n) => *n != 0,
        Value::U8(n) => *n != 0,
        Value::U16(n) => *n != 0,
        Value::U32(n) => *n != 0,
        Value::U64(n) => *n != 0,
        Value::Usize(n) => *n != 0,
        Value::F32(x) => *x != 0.0,
        Value::F64(x) => *x != 0.0,
        Value::Char(c) => *c != '\0',
        Value::Duration(d) => duration_nanos(d) != 0,
        Value::Str(s) => parse_bool(s).ok_or_else(|| ConvertError::fail(val, TARGET))?,
        Value::Bytes(b) => utf8(b)
            .ok()
            .and_then(parse_bool)
            .ok_or_else(|| ConvertError::fail(val, TARGET))?,
        Value::Seq(items) => !items.is_empty(),
        Value::Runes(r) => !r.is_empty(),
        Value::Map(m) => !m.is_empty(),
        _ => return Err(ConvertError::fail(val, TARGET)),
    };
    Ok(b)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" => return Some(true),
        "0" => return Some(false),
        _ => {}
    }
    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("t") {
        return Some(true);
    }
    if s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("f") {
        return Some(false);
    }
    if let Ok(x) = s.parse::<f64>() {
        return Some(x != 0.0);
    }
    let word = s.trim();
    if word.eq_ignore_ascii_case("on") {
        Some(true)
    } else if word.eq_ignore_ascii_case("off") {
        Some(false)
    } else {
        None
    }
}
