//! Structural category of a canonical value.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Tag reported by the canonicalizer for the value it reduced to.
///
/// Pointers and named types never surface as a kind: they are always
/// unwrapped to whatever they point at or wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Bytes,
    Sequence,
    Mapping,
    Struct,
    Other,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Struct => "struct",
            Kind::Other => "other",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, Kind::Int | Kind::Uint | Kind::Float)
    }

    /// Kinds whose truthiness is decided by element count.
    pub const fn is_collection(self) -> bool {
        matches!(self, Kind::Sequence | Kind::Mapping)
    }

    pub const fn is_textual(self) -> bool {
        matches!(self, Kind::String | Kind::Bytes)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}
