//! `cvt` is the single supported public entrypoint for converting dynamically typed
//! values into concrete types.
//!
//! This crate intentionally performs **no** I/O and holds no mutable global state.
//! It focuses on:
//! - the dynamic value model
//! - fallible conversions with descriptive errors
//! - default-value call forms that never fail
//! - deterministic JSON rendering

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `cvt::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the dynamic value model.
#[doc(hidden)]
pub mod core {
    pub use cvt_core::model::{TIME_TEXT_LAYOUT, duration_nanos, format_duration};
    pub use cvt_core::{
        Capabilities, Field, Kind, Mapping, Named, Opaque, Struct, Value, capabilities, indirect,
    };
}

// Re-export the conversion engine.
#[doc(hidden)]
pub mod convert {
    pub use cvt_convert::{
        BUILTIN_FORMATS, Cause, ConvertError, DEFAULT_TIME_OPTIONS, ErrorCode, Integer, Layout,
        Limit, Target, TimeFormat, TimeOptions, UnknownTarget, columns, field, keys, to_bool,
        to_float32, to_float64, to_float64_slice, to_int, to_int8, to_int16, to_int32, to_int64,
        to_int64_slice, to_int_map, to_int_slice, to_integer, to_slice, to_slice_with, to_string,
        to_string_map, to_string_slice, to_time, to_time_with_options, to_uint, to_uint8,
        to_uint16, to_uint32, to_uint64,
    };
}

/// Call forms that fall back to a default instead of failing.
pub mod default;

/// JSON rendering of dynamic values.
pub mod json;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::convert::*;
    pub use crate::core::{Capabilities, Field, Kind, Mapping, Named, Opaque, Struct, Value};
    pub use crate::default::*;
    pub use crate::json;
}
