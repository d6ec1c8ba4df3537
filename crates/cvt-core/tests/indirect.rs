use std::sync::Arc;

use cvt_core::{Capabilities, Kind, Named, Value, capabilities, indirect};
use proptest::prelude::*;

#[derive(Debug)]
struct Label;

impl Capabilities for Label {
    fn render(&self) -> Option<String> {
        Some("label".to_string())
    }
}

fn wrap(v: Value, depth: usize) -> Value {
    (0..depth).fold(v, |acc, _| Value::ptr(acc))
}

#[test]
fn direct_values_are_returned_as_is() {
    let v = Value::I32(7);
    let (inner, kind) = indirect(&v);
    assert!(std::ptr::eq(inner, &v));
    assert_eq!(kind, Kind::Int);
}

#[test]
fn pointer_chain_reduces_to_pointee() {
    let v = wrap(Value::from("abc"), 5);
    let (inner, kind) = indirect(&v);
    assert_eq!(inner, &Value::from("abc"));
    assert_eq!(kind, Kind::String);
}

#[test]
fn nil_pointer_at_any_depth_is_null() {
    for depth in 0..4 {
        let v = wrap(Value::nil_ptr(), depth);
        let (inner, kind) = indirect(&v);
        assert!(inner.is_null(), "depth {depth}");
        assert_eq!(kind, Kind::Null);
    }
}

#[test]
fn named_types_reduce_to_underlying_kind() {
    let v = Value::named("Celsius", 21.5f64);
    assert_eq!(indirect(&v), (&Value::F64(21.5), Kind::Float));

    let nested = Value::ptr(Value::named("Outer", Value::named("Inner", 3u8)));
    assert_eq!(indirect(&nested).1, Kind::Uint);
}

#[test]
fn kinds_of_non_primitive_shapes() {
    assert_eq!(Value::from('x').kind(), Kind::Int);
    assert_eq!(Value::Runes(vec!['a']).kind(), Kind::Sequence);
    assert_eq!(Value::bytes(b"ab".to_vec()).kind(), Kind::Bytes);
    assert_eq!(Value::map([("a", 1)]).kind(), Kind::Mapping);
    assert_eq!(Value::Duration(chrono::TimeDelta::seconds(1)).kind(), Kind::Int);
}

#[test]
fn capabilities_follow_pointers_but_not_inner_named_values() {
    let named = Named::new("Tag", 1).with_capabilities(Arc::new(Label));
    let v = Value::ptr(Value::ptr(named.clone()));
    let caps = capabilities(&v).and_then(|c| c.render());
    assert_eq!(caps.as_deref(), Some("label"));

    let outer = Value::named("Outer", named);
    assert!(capabilities(&outer).is_none());
    assert!(capabilities(&Value::I8(1)).is_none());
}

proptest! {
    #[test]
    fn indirect_is_idempotent(n in any::<i64>(), depth in 0usize..8) {
        let v = wrap(Value::named("N", n), depth);
        let (once, kind) = indirect(&v);
        let (twice, kind2) = indirect(once);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(kind, kind2);
        prop_assert_eq!(once, &Value::I64(n));
    }
}
