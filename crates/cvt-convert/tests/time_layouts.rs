mod common;

use chrono::{Datelike, FixedOffset, TimeDelta, TimeZone, Timelike, Utc};
use cvt_convert::{ErrorCode, Layout, TimeFormat, TimeOptions, to_time, to_time_with_options};
use cvt_core::Value;

use common::stringer;

fn nov_10_2009_2300_utc() -> i64 {
    Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap().timestamp()
}

#[test]
fn layouts_resolve_to_the_same_instant() {
    let inputs = [
        "2009-11-10T23:00:00Z",
        "2009-11-10T23:00:00+00:00",
        "Tue, 10 Nov 2009 23:00:00 +0000",
        "Tue Nov 10 23:00:00 2009",
        "2009-11-10T23:00:00",
        "2009-11-10 23:00:00",
        "2009-11-10 23:00:00 +0000",
        "2009/11/10 23:00:00",
        "2009.11.10 23:00:00",
        "2009年11月10日 23:00:00",
    ];
    for input in inputs {
        let t = to_time(&Value::from(input)).unwrap_or_else(|e| panic!("{input:?}: {e}"));
        assert_eq!(t.timestamp(), nov_10_2009_2300_utc(), "input {input:?}");
    }
}

#[test]
fn dates_resolve_to_midnight() {
    for input in ["2009-11-10", "10 Nov 2009", "2009/11/10", "2009.11.10", "2009年11月10日"] {
        let t = to_time(&Value::from(input)).unwrap_or_else(|e| panic!("{input:?}: {e}"));
        assert_eq!((t.year(), t.month(), t.day()), (2009, 11, 10), "input {input:?}");
        assert_eq!((t.hour(), t.minute(), t.second()), (0, 0, 0), "input {input:?}");
    }
}

#[test]
fn numeric_offsets_are_kept() {
    let t = to_time(&Value::from("2009-11-10 23:00:00 +08:00")).unwrap();
    assert_eq!(t.offset().local_minus_utc(), 8 * 3600);
    assert_eq!(t.timestamp(), nov_10_2009_2300_utc() - 8 * 3600);

    let t = to_time(&Value::from("2009-11-10T23:00:00.5+01:00")).unwrap();
    assert_eq!(t.nanosecond(), 500_000_000);
}

#[test]
fn kitchen_clock_lands_on_year_zero() {
    let t = to_time(&Value::from("11:30PM")).unwrap();
    assert_eq!(t.year(), 0);
    assert_eq!((t.hour(), t.minute()), (23, 30));
}

#[test]
fn integers_and_durations_are_unix_seconds() {
    let t = to_time(&Value::I64(1_257_894_000)).unwrap();
    assert_eq!(t.timestamp(), 1_257_894_000);

    let t = to_time(&Value::ptr(Value::U32(60))).unwrap();
    assert_eq!(t.timestamp(), 60);

    let t = to_time(&Value::Duration(TimeDelta::seconds(90))).unwrap();
    assert_eq!(t.timestamp(), 90);
}

#[test]
fn timestamps_pass_through() {
    let t = Utc.with_ymd_and_hms(2020, 2, 29, 12, 0, 0).unwrap();
    assert_eq!(to_time(&Value::from(t)).unwrap(), t);
}

#[test]
fn rendered_text_is_parsed() {
    let t = to_time(&stringer("2009-11-10T23:00:00Z")).unwrap();
    assert_eq!(t.timestamp(), nov_10_2009_2300_utc());
}

#[test]
fn failures() {
    let err = to_time(&Value::from("not a date")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnparsableDate);
    assert!(err.to_string().ends_with("unable to parse date: not a date"));

    assert_eq!(to_time(&Value::Null).unwrap_err().code(), ErrorCode::ConversionFail);
    assert!(to_time(&Value::F64(1.0)).is_err());
    assert!(to_time(&Value::seq([1])).is_err());
}

#[test]
fn configured_offset_applies_to_inputs_without_one() {
    let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
    let opts = TimeOptions::default().with_offset(east8);

    let t = to_time_with_options(&Value::from("2009-11-10 23:00:00"), &opts).unwrap();
    assert_eq!(t.offset().local_minus_utc(), 8 * 3600);
    assert_eq!(t.timestamp(), nov_10_2009_2300_utc() - 8 * 3600);

    // explicit offsets win
    let t = to_time_with_options(&Value::from("2009-11-10T23:00:00Z"), &opts).unwrap();
    assert_eq!(t.timestamp(), nov_10_2009_2300_utc());
}

#[test]
fn custom_layouts_are_tried_after_builtins() {
    let input = Value::from("10|11|2009");
    assert!(to_time(&input).is_err());

    let opts = TimeOptions::default().with_format(TimeFormat::custom("%d|%m|%Y"));
    let t = to_time_with_options(&input, &opts).unwrap();
    assert_eq!((t.year(), t.month(), t.day()), (2009, 11, 10));
}

#[test]
fn custom_layouts_are_classified_by_specifiers() {
    assert_eq!(TimeFormat::custom("%Y-%m-%d %H:%M %z").layout(), Layout::Zoned);
    assert_eq!(TimeFormat::custom("%Y-%m-%d %H:%M %Z").layout(), Layout::NamedZone);
    assert_eq!(TimeFormat::custom("%Y-%m-%d %H:%M").layout(), Layout::Naive);
    assert_eq!(TimeFormat::custom("%d/%m/%Y").layout(), Layout::Date);
    assert_eq!(TimeFormat::custom("%H:%M").layout(), Layout::Time);
    assert_eq!(TimeFormat::custom("%b %d %H:%M").layout(), Layout::Stamp);
}
