use cvt_core::{Value, indirect};

use crate::error::{Cause, ConvertError, Limit};
use crate::num::{Whole, whole_of};

/// A fixed-width integer target.
///
/// Bounds are widened to `i128`, which holds every 64-bit bound exactly.
pub trait Integer: Copy + TryFrom<i128> {
    /// Target name used in diagnostics.
    const NAME: &'static str;
    const MIN: i128;
    const MAX: i128;
}

macro_rules! integer_targets {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Integer for $t {
                const NAME: &'static str = $name;
                const MIN: i128 = <$t>::MIN as i128;
                const MAX: i128 = <$t>::MAX as i128;
            }
        )*
    };
}

integer_targets! {
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    isize => "int",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    usize => "uint",
}

/// Convert to any [`Integer`] target.
///
/// Floats and float text truncate toward zero. A negative source never
/// converts to an unsigned target, even when it truncates to zero.
/// Values beyond the target's range fail with the crossed bound attached.
pub fn to_integer<T: Integer>(val: &Value) -> Result<T, ConvertError> {
    let (v, _) = indirect(val);
    whole_of(v)
        .and_then(narrow::<T>)
        .map_err(|cause| ConvertError::new(val, T::NAME, cause))
}

fn narrow<T: Integer>(w: Whole) -> Result<T, Cause> {
    if T::MIN == 0 && w.negative {
        return Err(Cause::ConversionFail);
    }
    if w.value > T::MAX {
        return Err(Cause::OutOfRange {
            limit: Limit::Int(T::MAX),
        });
    }
    if w.value < T::MIN {
        return Err(Cause::OutOfRange {
            limit: Limit::Int(T::MIN),
        });
    }
    T::try_from(w.value).map_err(|_| Cause::ConversionFail)
}

pub fn to_int8(val: &Value) -> Result<i8, ConvertError> {
    to_integer(val)
}

pub fn to_int16(val: &Value) -> Result<i16, ConvertError> {
    to_integer(val)
}

pub fn to_int32(val: &Value) -> Result<i32, ConvertError> {
    to_integer(val)
}

pub fn to_int64(val: &Value) -> Result<i64, ConvertError> {
    to_integer(val)
}

/// Platform-width signed integer.
pub fn to_int(val: &Value) -> Result<isize, ConvertError> {
    to_integer(val)
}

pub fn to_uint8(val: &Value) -> Result<u8, ConvertError> {
    to_integer(val)
}

pub fn to_uint16(val: &Value) -> Result<u16, ConvertError> {
    to_integer(val)
}

pub fn to_uint32(val: &Value) -> Result<u32, ConvertError> {
    to_integer(val)
}

pub fn to_uint64(val: &Value) -> Result<u64, ConvertError> {
    to_integer(val)
}

/// Platform-width unsigned integer.
pub fn to_uint(val: &Value) -> Result<usize, ConvertError> {
    to_integer(val)
}
