//! Canonicalization of dynamic values.
//!
//! Goals:
//! - follow pointer chains of any depth, stopping at the first nil
//! - unwrap named types to the value they wrap
//! - never copy: the result borrows from the input
//!
//! Notes:
//! - Values without indirection are returned as-is, so converters can call
//!   this unconditionally on their direct path.
//! - Owned trees cannot be cyclic; every step strictly descends.

use crate::kind::Kind;
use crate::model::{Capabilities, Value};

static NULL: Value = Value::Null;

/// Reduce a value to its underlying representation and kind.
///
/// A nil pointer at any depth yields `(Null, Kind::Null)`.
#[inline]
pub fn indirect(v: &Value) -> (&Value, Kind) {
    let mut cur = v;
    loop {
        match cur {
            Value::Ptr(None) => return (&NULL, Kind::Null),
            Value::Ptr(Some(inner)) => cur = inner,
            Value::Named(n) => cur = n.inner(),
            other => {
                // Everything except Ptr/Named has a shallow kind.
                let kind = other.shallow_kind().unwrap_or(Kind::Other);
                return (other, kind);
            }
        }
    }
}

/// Capabilities of a value, looking through non-nil pointers.
///
/// Only the outermost named type counts: a named type wrapping another named
/// type does not inherit the inner one's capabilities.
pub fn capabilities(v: &Value) -> Option<&dyn Capabilities> {
    match v {
        Value::Ptr(Some(inner)) => capabilities(inner),
        Value::Named(n) => n.capabilities(),
        Value::Struct(s) => s.capabilities(),
        Value::Opaque(o) => Some(o.capabilities()),
        _ => None,
    }
}
