use cvt_core::{Kind, Value, indirect};

use crate::error::{Cause, ConvertError};
use crate::float::to_float64;
use crate::int::{to_int, to_int64};
use crate::string::to_string;
use crate::walk::{deep_values, sorted_values};

const TARGET: &str = "slice";

/// Convert to a sequence of values.
///
/// - text => one `Char` per code point
/// - bytes => one `U8` per byte
/// - sequences => their elements
/// - mappings => values, ordered by the canonical text of their keys
/// - structs => exported field values, embedded members spliced in place
///
/// nil, including a nil pointer, is rejected.
pub fn to_slice(val: &Value) -> Result<Vec<Value>, ConvertError> {
    let (v, kind) = indirect(val);
    if kind == Kind::Null {
        return Err(ConvertError::new(val, TARGET, Cause::UnsupportedNil));
    }

    let items = match v {
        Value::Str(s) => s.chars().map(Value::Char).collect(),
        Value::Bytes(b) => b.iter().copied().map(Value::U8).collect(),
        Value::Runes(r) => r.iter().copied().map(Value::Char).collect(),
        Value::Seq(items) => items.clone(),
        Value::Map(m) => sorted_values(m).cloned().collect(),
        Value::Struct(s) => deep_values(s),
        _ => return Err(ConvertError::fail(val, TARGET)),
    };
    Ok(items)
}

/// [`to_slice`], then every element through `convert`.
///
/// The first element that fails fails the whole call with its own error.
pub fn to_slice_with<T, F>(val: &Value, convert: F) -> Result<Vec<T>, ConvertError>
where
    F: Fn(&Value) -> Result<T, ConvertError>,
{
    to_slice(val)?.iter().map(convert).collect()
}

pub fn to_int_slice(val: &Value) -> Result<Vec<isize>, ConvertError> {
    to_slice_with(val, to_int)
}

pub fn to_int64_slice(val: &Value) -> Result<Vec<i64>, ConvertError> {
    to_slice_with(val, to_int64)
}

pub fn to_float64_slice(val: &Value) -> Result<Vec<f64>, ConvertError> {
    to_slice_with(val, to_float64)
}

pub fn to_string_slice(val: &Value) -> Result<Vec<String>, ConvertError> {
    to_slice_with(val, to_string)
}
