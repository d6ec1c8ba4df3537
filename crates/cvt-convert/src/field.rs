use cvt_core::{Kind, Value, indirect};

use crate::error::{Cause, ConvertError};
use crate::string::{canonical_text, to_string};
use crate::walk::{field_names, lookup, sorted_entries, sorted_values};

/// Look up a member by key.
///
/// The key is compared through its text form, so any value that converts
/// to text can address a mapping entry or a struct field. On a mapping, the
/// first entry in key order whose key text matches wins.
pub fn field<'a>(val: &'a Value, key: &Value) -> Result<&'a Value, ConvertError> {
    let (v, kind) = indirect(val);
    if kind == Kind::Null {
        return Err(ConvertError::new(val, "field", Cause::UnsupportedNil));
    }

    let name = to_string(key)?;
    let found = match v {
        Value::Map(m) => sorted_entries(m)
            .into_iter()
            .find(|(k, _)| canonical_text(k).is_some_and(|text| text == name))
            .map(|(_, v)| v),
        Value::Struct(s) => lookup(s, &name),
        _ => return Err(ConvertError::fail(val, "field")),
    };

    found.ok_or_else(|| ConvertError::new(val, "field", Cause::FieldNotFound { field: name }))
}

/// [`field`] of every element of a sequence, or of every mapping value in
/// key order.
///
/// All or nothing: the first element without the member fails the call.
pub fn columns<'a>(val: &'a Value, key: &Value) -> Result<Vec<&'a Value>, ConvertError> {
    let (v, kind) = indirect(val);
    match v {
        _ if kind == Kind::Null => Err(ConvertError::new(val, "columns", Cause::UnsupportedNil)),
        Value::Seq(items) => items.iter().map(|item| field(item, key)).collect(),
        Value::Map(m) => sorted_values(m).map(|item| field(item, key)).collect(),
        _ => Err(ConvertError::fail(val, "columns")),
    }
}

/// Keys of a mapping in key-text order, as the original key values; or the
/// exported field names of a struct.
pub fn keys(val: &Value) -> Result<Vec<Value>, ConvertError> {
    let (v, kind) = indirect(val);
    match v {
        _ if kind == Kind::Null => Err(ConvertError::new(val, "keys", Cause::UnsupportedNil)),
        Value::Map(m) => Ok(sorted_entries(m).into_iter().map(|(k, _)| k.clone()).collect()),
        Value::Struct(s) => Ok(field_names(s).into_iter().map(Value::Str).collect()),
        _ => Err(ConvertError::fail(val, "keys")),
    }
}
