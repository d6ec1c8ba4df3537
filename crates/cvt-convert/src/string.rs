use cvt_core::model::{TIME_TEXT_LAYOUT, format_duration};
use cvt_core::{Value, capabilities, indirect};

use crate::error::ConvertError;

/// Convert to text.
///
/// A value's own capabilities come first: its rendering, then its error
/// message, then its JSON marshaling when that succeeds. Otherwise:
///
/// - nil => `""`
/// - integers => base 10
/// - floats => shortest round-trip decimal, never an exponent
/// - bytes => UTF-8 text
/// - timestamps => `2006-01-02 15:04:05.999 -0700` form
/// - durations => `1h2m3.5s` form
pub fn to_string(val: &Value) -> Result<String, ConvertError> {
    canonical_text(val).ok_or_else(|| ConvertError::fail(val, "string"))
}

/// Same text as [`to_string`], `None` when there is no text form.
pub(crate) fn canonical_text(val: &Value) -> Option<String> {
    if let Some(caps) = capabilities(val) {
        if let Some(text) = caps.render() {
            return Some(text);
        }
        if let Some(text) = caps.error_message() {
            return Some(text);
        }
        if let Some(Ok(text)) = caps.marshal_json() {
            return Some(text);
        }
    }

    let (v, _) = indirect(val);
    text_of(v)
}

fn text_of(v: &Value) -> Option<String> {
    let text = match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::I8(n) => n.to_string(),
        Value::I16(n) => n.to_string(),
        Value::I32(n) => n.to_string(),
        Value::I64(n) => n.to_string(),
        Value::Isize(n) => n.to_string(),
        Value::U8(n) => n.to_string(),
        Value::U16(n) => n.to_string(),
        Value::U32(n) => n.to_string(),
        Value::U64(n) => n.to_string(),
        Value::Usize(n) => n.to_string(),
        Value::F32(x) => x.to_string(),
        Value::F64(x) => x.to_string(),
        Value::Char(c) => c.to_string(),
        Value::Str(s) => s.clone(),
        Value::Bytes(b) => String::from_utf8(b.clone()).ok()?,
        Value::Runes(r) => r.iter().collect(),
        Value::Time(t) => t.format(TIME_TEXT_LAYOUT).to_string(),
        Value::Duration(d) => format_duration(d),
        _ => return None,
    };
    Some(text)
}
