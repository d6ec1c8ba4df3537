#![allow(dead_code)]

use std::sync::Arc;

use cvt_core::{Capabilities, Opaque, Struct, Value};

/// Renders itself as fixed text.
#[derive(Debug)]
pub struct Render(pub &'static str);

impl Capabilities for Render {
    fn render(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Marshals to JSON, successfully or not.
#[derive(Debug)]
pub struct Marshal(pub Result<&'static str, &'static str>);

impl Capabilities for Marshal {
    fn marshal_json(&self) -> Option<Result<String, String>> {
        Some(self.0.map(str::to_string).map_err(str::to_string))
    }
}

pub fn stringer(text: &'static str) -> Value {
    Value::Opaque(Opaque::new("Stringer", Arc::new(Render(text))))
}

pub fn marshaler(out: Result<&'static str, &'static str>) -> Value {
    Value::Opaque(Opaque::new("Marshaler", Arc::new(Marshal(out))))
}

pub fn base() -> Struct {
    Struct::new("Base").field("C1", "base").field("C2", 2)
}

/// `C1` is declared directly and again inside the embedded `Base`.
pub fn record() -> Value {
    Struct::new("Record")
        .field("C1", "outer")
        .embed("Base", base())
        .field("C3", 3.5)
        .private("secret", "x")
        .into()
}
