//! ⚠️ GOLDEN TESTS – PUBLIC CONVERSION CONTRACT ⚠️
//!
//! These pin the observable behaviour of the prelude surface. A change here
//! is a behaviour change for every consumer.

use chrono::{TimeZone, Utc};
use cvt::prelude::*;
use proptest::prelude::*;

#[test]
fn on_off_words() -> anyhow::Result<()> {
    assert!(!to_bool(&Value::from("off"))?);
    assert!(to_bool(&Value::from("On"))?);
    Ok(())
}

#[test]
fn numeric_text_truncates() -> anyhow::Result<()> {
    assert_eq!(to_int64(&Value::from("-8.01"))?, -8);
    assert_eq!(to_int(&Value::from("8.99"))?, 8);
    assert_eq!(to_int(&Value::from("-8.99"))?, -8);
    Ok(())
}

#[test]
fn negative_to_unsigned_fails() {
    let err = to_uint32(&Value::I32(-8)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConversionFail);
    assert_eq!(err.to_string(), "unable to convert -8 of type int32 to uint32");
}

#[test]
fn uint8_boundary() -> anyhow::Result<()> {
    assert_eq!(to_uint8(&Value::from("255"))?, 255);
    let err = to_uint8(&Value::from("256")).unwrap_err();
    assert_eq!(err.limit(), Some(Limit::Int(255)));
    Ok(())
}

#[test]
fn float_text_has_no_trailing_zero() -> anyhow::Result<()> {
    assert_eq!(to_string(&Value::F64(3.140))?, "3.14");
    Ok(())
}

#[test]
fn rfc3339_instant() -> anyhow::Result<()> {
    let t = to_time(&Value::from("2009-11-10T23:00:00Z"))?;
    assert_eq!(t, Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap());
    Ok(())
}

#[test]
fn struct_to_string_map() -> anyhow::Result<()> {
    let person: Value = Struct::new("Person").field("Name", "cvt").field("Age", 3).into();
    let m = to_string_map(&person)?;
    assert_eq!(m.len(), 2);
    assert_eq!(m["Name"], Value::from("cvt"));
    assert_eq!(m["Age"], Value::I32(3));
    assert_eq!(json::to_canonical_json_string(&person)?, r#"{"Age":3,"Name":"cvt"}"#);
    Ok(())
}

#[test]
fn embedded_field_precedence() -> anyhow::Result<()> {
    let v: Value = Struct::new("Outer")
        .field("C1", "outer")
        .embed("Inner", Value::ptr(Struct::new("Inner").field("C1", "inner")))
        .into();
    assert_eq!(to_string_map(&v)?["C1"], Value::from("outer"));
    assert_eq!(field(&v, &Value::from("C1"))?, &Value::from("outer"));
    Ok(())
}

#[test]
fn nil_pointers_yield_zero_values() {
    let nil = Value::ptr(Value::ptr(Value::nil_ptr()));
    assert!(!to_bool_or(&nil, None));
    assert_eq!(to_int64_or(&nil, None), 0);
    assert_eq!(to_uint8_or(&nil, None), 0);
    assert_eq!(to_float64_or(&nil, None), 0.0);
    assert_eq!(to_string_or(&nil, None), "");
    assert_eq!(to_int64(&nil).ok(), Some(0));
}

proptest! {
    #[test]
    fn collection_truthiness_is_length(items in proptest::collection::vec(any::<i32>(), 0..8)) {
        let expected = !items.is_empty();
        prop_assert_eq!(to_bool(&Value::from(items.clone())).unwrap(), expected);

        let m = Value::map(items.iter().enumerate().map(|(i, n)| (i as i64, *n)));
        prop_assert_eq!(to_bool(&m).unwrap(), expected);
    }

    #[test]
    fn float32_widening_has_no_artifacts(mantissa in -9_999_999i32..=9_999_999, scale in 0u32..6) {
        let f = (mantissa as f64 / 10f64.powi(scale as i32)) as f32;
        let wide = to_float64(&Value::F32(f)).unwrap();
        let reparsed: f32 = to_string(&Value::F64(wide)).unwrap().parse().unwrap();
        prop_assert_eq!(reparsed, f);
    }

    #[test]
    fn mapping_order_is_stable(keys_in in proptest::collection::btree_set(any::<u16>(), 1..10)) {
        let m = Value::map(keys_in.iter().map(|k| (*k, k.to_string())));
        let first = to_slice(&m).unwrap();
        let second = to_slice(&m).unwrap();
        prop_assert_eq!(&first, &second);

        let mut texts: Vec<String> = keys_in.iter().map(u16::to_string).collect();
        texts.sort();
        let expected: Vec<Value> = texts.into_iter().map(Value::Str).collect();
        prop_assert_eq!(first, expected);
    }
}
