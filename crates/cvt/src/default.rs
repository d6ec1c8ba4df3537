//! Every `to_<T>_or` returns the converted value, or `default` when the
//! conversion fails, or the target's zero value when no default is given.
//!
//! ```
//! use cvt::prelude::*;
//!
//! assert_eq!(to_int64_or(&Value::from("12"), None), 12);
//! assert_eq!(to_int64_or(&Value::from("x"), 7), 7);
//! assert_eq!(to_bool_or(&Value::from("x"), None), false);
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use cvt_convert::{self as convert, ConvertError};
use cvt_core::Value;

fn or_default<T: Default>(res: Result<T, ConvertError>, default: Option<T>) -> T {
    match res {
        Ok(v) => v,
        Err(err) => {
            tracing::trace!(%err, "using default value");
            default.unwrap_or_default()
        }
    }
}

macro_rules! or_forms {
    ($($name:ident => $conv:ident : $t:ty),* $(,)?) => {
        $(
            pub fn $name(val: &Value, default: impl Into<Option<$t>>) -> $t {
                or_default(convert::$conv(val), default.into())
            }
        )*
    };
}

or_forms! {
    to_bool_or => to_bool: bool,
    to_int_or => to_int: isize,
    to_int8_or => to_int8: i8,
    to_int16_or => to_int16: i16,
    to_int32_or => to_int32: i32,
    to_int64_or => to_int64: i64,
    to_uint_or => to_uint: usize,
    to_uint8_or => to_uint8: u8,
    to_uint16_or => to_uint16: u16,
    to_uint32_or => to_uint32: u32,
    to_uint64_or => to_uint64: u64,
    to_float32_or => to_float32: f32,
    to_float64_or => to_float64: f64,
    to_string_or => to_string: String,
    to_slice_or => to_slice: Vec<Value>,
    to_int_slice_or => to_int_slice: Vec<isize>,
    to_int64_slice_or => to_int64_slice: Vec<i64>,
    to_float64_slice_or => to_float64_slice: Vec<f64>,
    to_string_slice_or => to_string_slice: Vec<String>,
    to_string_map_or => to_string_map: BTreeMap<String, Value>,
    to_int_map_or => to_int_map: BTreeMap<i64, Value>,
    keys_or => keys: Vec<Value>,
}

/// Falls back to the Unix epoch.
pub fn to_time_or(
    val: &Value,
    default: impl Into<Option<DateTime<FixedOffset>>>,
) -> DateTime<FixedOffset> {
    or_default(convert::to_time(val), default.into())
}

/// Owned copy of [`field`](cvt_convert::field); falls back to nil.
pub fn field_or(val: &Value, key: &Value, default: impl Into<Option<Value>>) -> Value {
    or_default(convert::field(val, key).cloned(), default.into())
}

/// Owned copy of [`columns`](cvt_convert::columns); falls back to an empty list.
pub fn columns_or(val: &Value, key: &Value, default: impl Into<Option<Vec<Value>>>) -> Vec<Value> {
    let res = convert::columns(val, key).map(|items| items.into_iter().cloned().collect());
    or_default(res, default.into())
}
