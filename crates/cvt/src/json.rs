//! JSON rendering of dynamic values.
//!
//! Rendering rules:
//! - a value's own JSON marshaling or text rendering wins
//! - mapping keys are rendered through `to_string` and sorted
//! - structs render like `to_string_map` (embedded members flattened)
//! - timestamps are RFC 3339 text, durations are integer nanoseconds
//! - non-finite floats have no JSON form and fail
//!
//! Notes:
//! - The canonical string form is minified with deep-sorted object keys, so it
//!   is stable across runs and suitable for snapshot comparisons.

use cvt_convert::{Cause, ConvertError, to_string, to_string_map};
use cvt_core::model::duration_nanos;
use cvt_core::{Value, capabilities, indirect};
use serde_json::{Map, Number};

const TARGET: &str = "json";

/// Render a value as a JSON tree.
pub fn to_json(val: &Value) -> Result<serde_json::Value, ConvertError> {
    if let Some(caps) = capabilities(val) {
        if let Some(Ok(text)) = caps.marshal_json() {
            return serde_json::from_str(&text).map_err(|err| {
                ConvertError::new(
                    val,
                    TARGET,
                    Cause::InvalidJson {
                        message: err.to_string(),
                    },
                )
            });
        }
        if caps.render().is_some() || caps.error_message().is_some() {
            return to_string(val).map(serde_json::Value::String);
        }
    }

    let (v, _) = indirect(val);
    let out = match v {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::I8(n) => (*n).into(),
        Value::I16(n) => (*n).into(),
        Value::I32(n) => (*n).into(),
        Value::I64(n) => (*n).into(),
        Value::Isize(n) => (*n).into(),
        Value::U8(n) => (*n).into(),
        Value::U16(n) => (*n).into(),
        Value::U32(n) => (*n).into(),
        Value::U64(n) => (*n).into(),
        Value::Usize(n) => (*n).into(),
        Value::F32(_) | Value::F64(_) => {
            let x = cvt_convert::to_float64(v)?;
            Number::from_f64(x)
                .map(serde_json::Value::Number)
                .ok_or_else(|| ConvertError::fail(val, TARGET))?
        }
        Value::Char(_) | Value::Str(_) | Value::Bytes(_) | Value::Runes(_) => {
            serde_json::Value::String(to_string(v)?)
        }
        Value::Seq(items) => items
            .iter()
            .map(to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(serde_json::Value::Array)?,
        Value::Map(m) => {
            let mut entries = Vec::with_capacity(m.len());
            for (k, x) in m.iter() {
                entries.push((to_string(k)?, to_json(x)?));
            }
            object(entries)
        }
        Value::Struct(_) => {
            let mut entries = Vec::new();
            for (name, x) in to_string_map(v)? {
                entries.push((name, to_json(&x)?));
            }
            object(entries)
        }
        Value::Time(t) => serde_json::Value::String(t.to_rfc3339()),
        Value::Duration(d) => {
            let nanos = i64::try_from(duration_nanos(d)).map_err(|_| ConvertError::fail(val, TARGET))?;
            nanos.into()
        }
        _ => return Err(ConvertError::fail(val, TARGET)),
    };
    Ok(out)
}

fn object(mut entries: Vec<(String, serde_json::Value)>) -> serde_json::Value {
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let mut map = Map::with_capacity(entries.len());
    for (k, v) in entries {
        map.insert(k, v);
    }
    serde_json::Value::Object(map)
}

/// Minified JSON text with sorted object keys.
pub fn to_canonical_json_string(val: &Value) -> Result<String, ConvertError> {
    let tree = to_json(val)?;
    Ok(tree.to_string())
}

/// Indented JSON text with sorted object keys.
pub fn to_pretty_json_string(val: &Value) -> Result<String, ConvertError> {
    let tree = to_json(val)?;
    serde_json::to_string_pretty(&tree).map_err(|err| {
        ConvertError::new(
            val,
            TARGET,
            Cause::InvalidJson {
                message: err.to_string(),
            },
        )
    })
}

/// Parse JSON text into a dynamic value.
pub fn from_json_str(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(text).map(Value::from)
}
