use chrono::{TimeDelta, TimeZone, Utc};
use cvt_core::model::format_duration;
use cvt_core::{Struct, Value};

#[test]
fn display_renders_literal_like_forms() {
    assert_eq!(Value::Null.to_string(), "nil");
    assert_eq!(Value::from("a\"b").to_string(), r#""a\"b""#);
    assert_eq!(Value::bytes(b"hi\n".to_vec()).to_string(), r#"b"hi\n""#);
    assert_eq!(Value::seq([1, 2, 3]).to_string(), "[1, 2, 3]");
    assert_eq!(Value::map([("k", true)]).to_string(), r#"{"k": true}"#);
    assert_eq!(Value::ptr(5u16).to_string(), "&5");
    assert_eq!(Value::named("Celsius", 1.5f64).to_string(), "Celsius(1.5)");

    let s = Struct::new("Point").field("X", 1).field("Y", 2);
    assert_eq!(Value::from(s).to_string(), "Point{X: 1, Y: 2}");

    let t = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
    assert_eq!(Value::from(t).to_string(), "2009-11-10 23:00:00 +0000");
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "nil");
    assert_eq!(Value::Isize(1).type_name(), "int");
    assert_eq!(Value::Usize(1).type_name(), "uint");
    assert_eq!(Value::ptr(Value::ptr(1i32)).type_name(), "**int32");
    assert_eq!(Value::nil_ptr().type_name(), "nil pointer");
    assert_eq!(Value::named("Celsius", 1.5f64).type_name(), "Celsius");
    assert_eq!(Value::from(Struct::new("Point")).type_name(), "Point");
}

#[test]
fn durations_render_in_compact_units() {
    assert_eq!(format_duration(&TimeDelta::zero()), "0s");
    assert_eq!(format_duration(&TimeDelta::nanoseconds(999)), "999ns");
    assert_eq!(format_duration(&TimeDelta::microseconds(1500)), "1.5ms");
    assert_eq!(format_duration(&TimeDelta::nanoseconds(2_500)), "2.5µs");
    assert_eq!(format_duration(&TimeDelta::seconds(120)), "2m0s");
    assert_eq!(format_duration(&TimeDelta::milliseconds(3_723_500)), "1h2m3.5s");
    assert_eq!(format_duration(&TimeDelta::seconds(-90)), "-1m30s");
}

#[test]
fn mapping_insert_replaces_equal_keys() {
    let mut m = cvt_core::Mapping::new();
    m.insert("a", 1);
    m.insert("b", 2);
    m.insert("a", 3);
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(&Value::from("a")), Some(&Value::I32(3)));
    let keys: Vec<_> = m.keys().cloned().collect();
    assert_eq!(keys, vec![Value::from("a"), Value::from("b")]);
}
