#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the cvt project.

Do NOT depend on this crate directly.
Use `cvt` instead.
"#]

//! Conversion rules for dynamic [`Value`](cvt_core::Value)s.
//!
//! Every converter takes a borrowed value and returns either the target or
//! a [`ConvertError`]; nothing here panics on well-formed input and nothing
//! mutates shared state.

pub mod error;

mod boolean;
mod field;
mod float;
mod int;
mod map;
mod num;
mod slice;
mod string;
mod target;
mod time;
mod walk;

pub use error::{Cause, ConvertError, ErrorCode, Limit};

pub use boolean::to_bool;
pub use field::{columns, field, keys};
pub use float::{to_float32, to_float64};
pub use int::{
    Integer, to_int, to_int8, to_int16, to_int32, to_int64, to_integer, to_uint, to_uint8,
    to_uint16, to_uint32, to_uint64,
};
pub use map::{to_int_map, to_string_map};
pub use slice::{
    to_float64_slice, to_int_slice, to_int64_slice, to_slice, to_slice_with, to_string_slice,
};
pub use string::to_string;
pub use target::{Target, UnknownTarget};
pub use time::{
    BUILTIN_FORMATS, DEFAULT_TIME_OPTIONS, Layout, TimeFormat, TimeOptions, to_time,
    to_time_with_options,
};
