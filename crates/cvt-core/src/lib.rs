#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the cvt project.

Do NOT depend on this crate directly.
Use `cvt` instead.
"#]

pub mod model;
pub mod kind;
pub mod indirect;
mod from;

pub use indirect::{capabilities, indirect};
pub use kind::Kind;
pub use model::{Capabilities, Field, Mapping, Named, Opaque, Struct, Value};
