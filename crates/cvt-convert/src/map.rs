use std::collections::BTreeMap;

use cvt_core::{Kind, Value, indirect};

use crate::error::{Cause, ConvertError};
use crate::int::to_int64;
use crate::num::utf8;
use crate::string::to_string;
use crate::walk::field_map;

/// Convert to a text-keyed mapping.
///
/// - mappings => every key through [`to_string`]
/// - text and bytes => decoded as a JSON object
/// - structs => exported fields by name, embedded members flattened in with
///   lower priority than direct fields
pub fn to_string_map(val: &Value) -> Result<BTreeMap<String, Value>, ConvertError> {
    const TARGET: &str = "string_map";

    let (v, kind) = indirect(val);
    let text = match v {
        _ if kind == Kind::Null => {
            return Err(ConvertError::new(val, TARGET, Cause::UnsupportedNil));
        }
        Value::Map(m) => {
            return m
                .iter()
                .map(|(k, x)| to_string(k).map(|key| (key, x.clone())))
                .collect();
        }
        Value::Struct(s) => return Ok(field_map(s)),
        Value::Str(s) => s.as_str(),
        Value::Bytes(b) => utf8(b).map_err(|cause| ConvertError::new(val, TARGET, cause))?,
        _ => return Err(ConvertError::fail(val, TARGET)),
    };

    Ok(json_object(val, text, TARGET)?
        .into_iter()
        .map(|(k, x)| (k, Value::from(x)))
        .collect())
}

/// Convert to an integer-keyed mapping.
///
/// Mapping keys go through [`to_int64`]. JSON object keys must be integer
/// literals. Structs have no integer keys and fail.
pub fn to_int_map(val: &Value) -> Result<BTreeMap<i64, Value>, ConvertError> {
    const TARGET: &str = "int_map";

    let (v, kind) = indirect(val);
    let text = match v {
        _ if kind == Kind::Null => {
            return Err(ConvertError::new(val, TARGET, Cause::UnsupportedNil));
        }
        Value::Map(m) => {
            return m
                .iter()
                .map(|(k, x)| to_int64(k).map(|key| (key, x.clone())))
                .collect();
        }
        Value::Str(s) => s.as_str(),
        Value::Bytes(b) => utf8(b).map_err(|cause| ConvertError::new(val, TARGET, cause))?,
        _ => return Err(ConvertError::fail(val, TARGET)),
    };

    json_object(val, text, TARGET)?
        .into_iter()
        .map(|(k, x)| match k.parse::<i64>() {
            Ok(n) => Ok((n, Value::from(x))),
            Err(_) => Err(ConvertError::new(
                val,
                TARGET,
                Cause::InvalidJson {
                    message: format!("object key {k:?} is not an integer"),
                },
            )),
        })
        .collect()
}

fn json_object(
    val: &Value,
    text: &str,
    target: &'static str,
) -> Result<serde_json::Map<String, serde_json::Value>, ConvertError> {
    serde_json::from_str(text).map_err(|err| {
        ConvertError::new(
            val,
            target,
            Cause::InvalidJson {
                message: err.to_string(),
            },
        )
    })
}
