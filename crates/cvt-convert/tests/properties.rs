use cvt_convert::{ErrorCode, keys, to_bool, to_int8, to_int64, to_uint64};
use cvt_core::Value;
use proptest::prelude::*;

proptest! {
    #[test]
    fn indirection_is_transparent(n in any::<i64>(), depth in 0usize..6) {
        let v = (0..depth).fold(Value::named("N", n), |acc, _| Value::ptr(acc));
        prop_assert_eq!(to_int64(&v).unwrap(), n);
    }

    #[test]
    fn narrowing_fails_exactly_outside_the_range(n in any::<i16>()) {
        match to_int8(&Value::I16(n)) {
            Ok(x) => prop_assert_eq!(i16::from(x), n),
            Err(e) => {
                prop_assert!(n < i16::from(i8::MIN) || n > i16::from(i8::MAX));
                prop_assert!(e.is_out_of_range());
            }
        }
    }

    #[test]
    fn negative_sources_never_convert_to_unsigned(n in i64::MIN..0) {
        let err = to_uint64(&Value::I64(n)).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::ConversionFail);
    }

    #[test]
    fn floats_truncate_toward_zero(x in -1e15f64..1e15f64) {
        prop_assert_eq!(to_int64(&Value::F64(x)).unwrap(), x.trunc() as i64);
    }

    #[test]
    fn integer_text_is_truthy_when_non_zero(n in any::<i32>()) {
        prop_assert_eq!(to_bool(&Value::from(n.to_string())).unwrap(), n != 0);
    }

    #[test]
    fn mapping_keys_come_back_sorted(mut names in proptest::collection::btree_set("[a-z]{1,6}", 0..12)
        .prop_map(|s| s.into_iter().collect::<Vec<_>>())
        .prop_shuffle())
    {
        let m = Value::map(names.iter().map(|n| (n.as_str(), 0)));
        names.sort();
        let expected: Vec<Value> = names.into_iter().map(Value::Str).collect();
        prop_assert_eq!(keys(&m).unwrap(), expected);
    }
}
