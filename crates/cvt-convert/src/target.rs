use std::fmt;
use std::str::FromStr;

use cvt_core::{Mapping, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConvertError;
use crate::time::{DEFAULT_TIME_OPTIONS, TimeOptions, to_time_with_options};
use crate::{boolean, float, int, map, slice, string};

/// A conversion target selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Time,
    Slice,
    StringMap,
    IntMap,
}

impl Target {
    pub const ALL: [Target; 18] = [
        Target::Bool,
        Target::Int,
        Target::Int8,
        Target::Int16,
        Target::Int32,
        Target::Int64,
        Target::Uint,
        Target::Uint8,
        Target::Uint16,
        Target::Uint32,
        Target::Uint64,
        Target::Float32,
        Target::Float64,
        Target::String,
        Target::Time,
        Target::Slice,
        Target::StringMap,
        Target::IntMap,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Bool => "bool",
            Target::Int => "int",
            Target::Int8 => "int8",
            Target::Int16 => "int16",
            Target::Int32 => "int32",
            Target::Int64 => "int64",
            Target::Uint => "uint",
            Target::Uint8 => "uint8",
            Target::Uint16 => "uint16",
            Target::Uint32 => "uint32",
            Target::Uint64 => "uint64",
            Target::Float32 => "float32",
            Target::Float64 => "float64",
            Target::String => "string",
            Target::Time => "time",
            Target::Slice => "slice",
            Target::StringMap => "string_map",
            Target::IntMap => "int_map",
        }
    }

    /// Convert and box the result back into a [`Value`].
    pub fn apply(self, val: &Value) -> Result<Value, ConvertError> {
        self.apply_with_options(val, &DEFAULT_TIME_OPTIONS)
    }

    pub fn apply_with_options(self, val: &Value, opts: &TimeOptions) -> Result<Value, ConvertError> {
        let out = match self {
            Target::Bool => Value::Bool(boolean::to_bool(val)?),
            Target::Int => Value::Isize(int::to_int(val)?),
            Target::Int8 => Value::I8(int::to_int8(val)?),
            Target::Int16 => Value::I16(int::to_int16(val)?),
            Target::Int32 => Value::I32(int::to_int32(val)?),
            Target::Int64 => Value::I64(int::to_int64(val)?),
            Target::Uint => Value::Usize(int::to_uint(val)?),
            Target::Uint8 => Value::U8(int::to_uint8(val)?),
            Target::Uint16 => Value::U16(int::to_uint16(val)?),
            Target::Uint32 => Value::U32(int::to_uint32(val)?),
            Target::Uint64 => Value::U64(int::to_uint64(val)?),
            Target::Float32 => Value::F32(float::to_float32(val)?),
            Target::Float64 => Value::F64(float::to_float64(val)?),
            Target::String => Value::Str(string::to_string(val)?),
            Target::Time => Value::Time(to_time_with_options(val, opts)?),
            Target::Slice => Value::Seq(slice::to_slice(val)?),
            Target::StringMap => Value::Map(map::to_string_map(val)?.into_iter().collect::<Mapping>()),
            Target::IntMap => Value::Map(map::to_int_map(val)?.into_iter().collect::<Mapping>()),
        };
        Ok(out)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target type: {0}")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTarget(s.to_string()))
    }
}
