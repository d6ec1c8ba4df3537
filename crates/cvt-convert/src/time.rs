//! Timestamp conversion.
//!
//! Text is matched against an ordered list of layouts; the first layout that
//! parses the whole input wins. Integers are Unix seconds.
//!
//! The process-wide list lives in [`DEFAULT_TIME_OPTIONS`] and is never
//! mutated. Callers needing extra layouts or another offset build their own
//! [`TimeOptions`] and pass it to [`to_time_with_options`].

use std::borrow::Cow;

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use cvt_core::{Value, capabilities, indirect};
use once_cell::sync::Lazy;

use crate::error::{Cause, ConvertError};
use crate::num::whole_of;

const TARGET: &str = "time";

/// How a layout's pattern is applied to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// RFC 3339, via the dedicated parser.
    Rfc3339,
    /// Pattern carries a numeric offset (`%z` and friends).
    Zoned,
    /// Pattern carries a zone abbreviation (`%Z`). The abbreviation is
    /// skipped and the result is UTC.
    NamedZone,
    /// Pattern without offset, followed by either `Z` or a numeric offset.
    Zulu,
    /// Date and time without offset, in the configured offset.
    Naive,
    /// Date only, at midnight in the configured offset.
    Date,
    /// Time of day only, on January 1st of year 0.
    Time,
    /// Date and time without a year; year 0 is assumed.
    Stamp,
}

/// One entry of the layout list: a strftime-style pattern and its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    pattern: Cow<'static, str>,
    layout: Layout,
}

impl TimeFormat {
    pub const fn new(layout: Layout, pattern: &'static str) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            layout,
        }
    }

    /// User-supplied pattern; the shape is derived from its specifiers.
    pub fn custom(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let layout = classify(&pattern);
        Self {
            pattern: Cow::Owned(pattern),
            layout,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Parse the whole input with this layout.
    pub fn parse(&self, s: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        let p = self.pattern.as_ref();
        match self.layout {
            Layout::Rfc3339 => DateTime::parse_from_rfc3339(s).ok(),
            Layout::Zoned => DateTime::parse_from_str(s, p).ok(),
            Layout::NamedZone => NaiveDateTime::parse_from_str(s, p).ok().map(in_utc),
            Layout::Zulu => match s.strip_suffix('Z') {
                Some(rest) => NaiveDateTime::parse_from_str(rest, p).ok().map(in_utc),
                None => DateTime::parse_from_str(s, &format!("{p}%z")).ok(),
            },
            Layout::Naive => {
                let naive = NaiveDateTime::parse_from_str(s, p).ok()?;
                local(naive, offset)
            }
            Layout::Date => {
                let date = NaiveDate::parse_from_str(s, p).ok()?;
                local(date.and_time(NaiveTime::MIN), offset)
            }
            Layout::Time => {
                let time = NaiveTime::parse_from_str(s, p).ok()?;
                local(NaiveDate::from_ymd_opt(0, 1, 1)?.and_time(time), offset)
            }
            Layout::Stamp => {
                let naive =
                    NaiveDateTime::parse_from_str(&format!("0000 {s}"), &format!("%Y {p}")).ok()?;
                local(naive, offset)
            }
        }
    }
}

fn classify(pattern: &str) -> Layout {
    let has = |specs: &[&str]| specs.iter().any(|spec| pattern.contains(spec));

    if has(&["%z", "%:z", "%::z", "%:::z", "%#z", "%+"]) {
        return Layout::Zoned;
    }
    if has(&["%Z"]) {
        return Layout::NamedZone;
    }

    let year = has(&["%Y", "%C", "%y", "%G", "%g", "%D", "%x", "%F", "%v"]);
    let date = year || has(&["%m", "%b", "%B", "%h", "%d", "%e", "%j"]);
    let time = has(&["%H", "%k", "%I", "%l", "%M", "%S", "%T", "%R", "%X", "%r"]);

    match (date, time) {
        (true, true) if !year => Layout::Stamp,
        (true, true) => Layout::Naive,
        (true, false) => Layout::Date,
        _ => Layout::Time,
    }
}

fn in_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.fix().from_utc_datetime(&naive)
}

fn local(naive: NaiveDateTime, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    offset.from_local_datetime(&naive).single()
}

/// Built-in layouts, in trial order.
pub static BUILTIN_FORMATS: [TimeFormat; 28] = [
    TimeFormat::new(Layout::Rfc3339, "%Y-%m-%dT%H:%M:%S%.f%:z"),
    // RFC 1123 with numeric zone, then with abbreviation
    TimeFormat::new(Layout::Zoned, "%a, %d %b %Y %H:%M:%S %z"),
    TimeFormat::new(Layout::NamedZone, "%a, %d %b %Y %H:%M:%S %Z"),
    // RFC 822
    TimeFormat::new(Layout::Zoned, "%d %b %y %H:%M %z"),
    TimeFormat::new(Layout::NamedZone, "%d %b %y %H:%M %Z"),
    // RFC 850
    TimeFormat::new(Layout::NamedZone, "%A, %d-%b-%y %H:%M:%S %Z"),
    // ANSI C, Unix date(1), Ruby
    TimeFormat::new(Layout::Naive, "%a %b %e %H:%M:%S %Y"),
    TimeFormat::new(Layout::NamedZone, "%a %b %e %H:%M:%S %Z %Y"),
    TimeFormat::new(Layout::Zoned, "%a %b %d %H:%M:%S %z %Y"),
    // kitchen clock
    TimeFormat::new(Layout::Time, "%I:%M%p"),
    // syslog stamp, any sub-second precision
    TimeFormat::new(Layout::Stamp, "%b %e %H:%M:%S%.f"),
    // ISO 8601 without offset
    TimeFormat::new(Layout::Naive, "%Y-%m-%dT%H:%M:%S%.f"),
    // git log
    TimeFormat::new(Layout::Zoned, "%a %b %e %H:%M:%S %Y %z"),
    // default timestamp rendering, trailing zone abbreviation optional
    TimeFormat::new(Layout::Zoned, "%Y-%m-%d %H:%M:%S%.f %z %Z"),
    TimeFormat::new(Layout::Date, "%Y-%m-%d"),
    TimeFormat::new(Layout::Date, "%d %b %Y"),
    // RFC 3339 without offset colon
    TimeFormat::new(Layout::Zoned, "%Y-%m-%dT%H:%M:%S%.f%z"),
    TimeFormat::new(Layout::Zoned, "%Y-%m-%d %H:%M:%S%.f %:z"),
    TimeFormat::new(Layout::Zoned, "%Y-%m-%d %H:%M:%S%.f %z"),
    // RFC 3339 with a space instead of `T`
    TimeFormat::new(Layout::Zulu, "%Y-%m-%d %H:%M:%S%.f"),
    TimeFormat::new(Layout::Naive, "%Y-%m-%d %H:%M:%S%.f"),
    TimeFormat::new(Layout::Date, "%Y.%m.%d"),
    TimeFormat::new(Layout::Naive, "%Y.%m.%d %H:%M:%S%.f"),
    TimeFormat::new(Layout::Date, "%Y/%m/%d"),
    TimeFormat::new(Layout::Naive, "%Y/%m/%d %H:%M:%S%.f"),
    TimeFormat::new(Layout::Date, "%Y年%m月%d日"),
    TimeFormat::new(Layout::Naive, "%Y年%m月%d日 %H:%M:%S%.f"),
    TimeFormat::new(Layout::Naive, "%Y年%m月%d日 %H时%M分%S秒"),
];

/// Layout list and offset used by timestamp conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeOptions {
    /// Tried in order.
    pub formats: Vec<TimeFormat>,
    /// Applied to inputs without an offset, and to Unix timestamps.
    pub offset: FixedOffset,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            formats: BUILTIN_FORMATS.to_vec(),
            offset: Utc.fix(),
        }
    }
}

impl TimeOptions {
    /// Append a layout after the existing ones.
    pub fn with_format(mut self, format: TimeFormat) -> Self {
        self.formats.push(format);
        self
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// First layout that parses the whole input.
    pub fn parse(&self, s: &str) -> Option<DateTime<FixedOffset>> {
        self.formats.iter().find_map(|format| {
            let t = format.parse(s, self.offset)?;
            tracing::trace!(pattern = format.pattern(), "time layout matched");
            Some(t)
        })
    }
}

/// Options used by [`to_time`].
pub static DEFAULT_TIME_OPTIONS: Lazy<TimeOptions> = Lazy::new(TimeOptions::default);

/// Convert to a timestamp, with the default layouts and UTC.
pub fn to_time(val: &Value) -> Result<DateTime<FixedOffset>, ConvertError> {
    to_time_with_options(val, &DEFAULT_TIME_OPTIONS)
}

/// Convert to a timestamp.
///
/// - timestamps => unchanged
/// - text => first matching layout
/// - integers and durations => Unix seconds
/// - anything rendering itself as text => that text, parsed
///
/// nil has no timestamp and fails.
pub fn to_time_with_options(
    val: &Value,
    opts: &TimeOptions,
) -> Result<DateTime<FixedOffset>, ConvertError> {
    let (v, _) = indirect(val);
    match v {
        Value::Time(t) => Ok(*t),
        Value::Str(s) => parse_text(val, s, opts),
        Value::I8(_)
        | Value::I16(_)
        | Value::I32(_)
        | Value::I64(_)
        | Value::Isize(_)
        | Value::U8(_)
        | Value::U16(_)
        | Value::U32(_)
        | Value::U64(_)
        | Value::Usize(_) => {
            let secs = whole_of(v).map_err(|cause| ConvertError::new(val, TARGET, cause))?;
            unix(val, secs.value, opts)
        }
        Value::Duration(d) => unix(val, i128::from(d.num_seconds()), opts),
        _ => match capabilities(val).and_then(|caps| caps.render()) {
            Some(text) => parse_text(val, &text, opts),
            None => Err(ConvertError::fail(val, TARGET)),
        },
    }
}

fn parse_text(
    val: &Value,
    s: &str,
    opts: &TimeOptions,
) -> Result<DateTime<FixedOffset>, ConvertError> {
    opts.parse(s).ok_or_else(|| {
        ConvertError::new(
            val,
            TARGET,
            Cause::UnparsableDate {
                input: s.to_string(),
            },
        )
    })
}

fn unix(val: &Value, secs: i128, opts: &TimeOptions) -> Result<DateTime<FixedOffset>, ConvertError> {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|t| t.with_timezone(&opts.offset))
        .ok_or_else(|| ConvertError::fail(val, TARGET))
}
