use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::kind::Kind;

/// Layout used when a timestamp is rendered as text.
///
/// Mirrors the struct-print form `2006-01-02 15:04:05.999999999 -0700`; the
/// fractional part is omitted when zero.
pub const TIME_TEXT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

/// Optional behaviour a dynamic value can expose.
///
/// Converters consult these before looking at the value's structure, so a
/// domain type controls its own textual identity.
pub trait Capabilities: fmt::Debug + Send + Sync {
    /// Render as text (stringer).
    fn render(&self) -> Option<String> {
        None
    }

    /// Message text when the value is an error.
    fn error_message(&self) -> Option<String> {
        None
    }

    /// JSON marshaling. `Some(Err(_))` means the marshaler exists but failed.
    fn marshal_json(&self) -> Option<Result<String, String>> {
        None
    }
}

/// A dynamically typed source value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    Runes(Vec<char>),
    Seq(Vec<Value>),
    Map(Mapping),
    Struct(Struct),
    Time(DateTime<FixedOffset>),
    Duration(TimeDelta),
    /// `None` is a nil pointer.
    Ptr(Option<Box<Value>>),
    Named(Named),
    Opaque(Opaque),
}

impl Value {
    pub fn ptr(inner: impl Into<Value>) -> Self {
        Value::Ptr(Some(Box::new(inner.into())))
    }

    pub fn nil_ptr() -> Self {
        Value::Ptr(None)
    }

    pub fn named(type_name: impl Into<String>, inner: impl Into<Value>) -> Self {
        Value::Named(Named::new(type_name, inner))
    }

    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(entries.into_iter().collect())
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Wrap an error so that it converts to text through its message.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        Value::Opaque(Opaque::new(
            "error",
            Arc::new(ErrorText(err.to_string())),
        ))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Kind after canonicalization.
    pub fn kind(&self) -> Kind {
        crate::indirect::indirect(self).1
    }

    /// Kind of this exact value, with pointers and named types left in place.
    ///
    /// Returns `None` for `Ptr` and `Named`, which have no kind of their own.
    pub(crate) fn shallow_kind(&self) -> Option<Kind> {
        let kind = match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::Isize(_)
            | Value::Char(_)
            | Value::Duration(_) => Kind::Int,
            Value::U8(_) | Value::U16(_) | Value::U32(_) | Value::U64(_) | Value::Usize(_) => {
                Kind::Uint
            }
            Value::F32(_) | Value::F64(_) => Kind::Float,
            Value::Str(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
            Value::Runes(_) | Value::Seq(_) => Kind::Sequence,
            Value::Map(_) => Kind::Mapping,
            Value::Struct(_) => Kind::Struct,
            Value::Time(_) | Value::Opaque(_) => Kind::Other,
            Value::Ptr(_) | Value::Named(_) => return None,
        };
        Some(kind)
    }

    /// Dynamic type name, used in diagnostics.
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "nil".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::I8(_) => "int8".to_string(),
            Value::I16(_) => "int16".to_string(),
            Value::I32(_) => "int32".to_string(),
            Value::I64(_) => "int64".to_string(),
            Value::Isize(_) => "int".to_string(),
            Value::U8(_) => "uint8".to_string(),
            Value::U16(_) => "uint16".to_string(),
            Value::U32(_) => "uint32".to_string(),
            Value::U64(_) => "uint64".to_string(),
            Value::Usize(_) => "uint".to_string(),
            Value::F32(_) => "float32".to_string(),
            Value::F64(_) => "float64".to_string(),
            Value::Char(_) => "char".to_string(),
            Value::Str(_) => "string".to_string(),
            Value::Bytes(_) => "bytes".to_string(),
            Value::Runes(_) => "chars".to_string(),
            Value::Seq(_) => "slice".to_string(),
            Value::Map(_) => "map".to_string(),
            Value::Struct(s) => s.name().to_string(),
            Value::Time(_) => "time".to_string(),
            Value::Duration(_) => "duration".to_string(),
            Value::Ptr(Some(inner)) => format!("*{}", inner.type_name()),
            Value::Ptr(None) => "nil pointer".to_string(),
            Value::Named(n) => n.name().to_string(),
            Value::Opaque(o) => o.name().to_string(),
        }
    }
}

/// Literal-like rendering for diagnostics (`"abc"`, `[1, 2]`, `Point{X: 1}`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null | Value::Ptr(None) => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::I8(n) => write!(f, "{n}"),
            Value::I16(n) => write!(f, "{n}"),
            Value::I32(n) => write!(f, "{n}"),
            Value::I64(n) => write!(f, "{n}"),
            Value::Isize(n) => write!(f, "{n}"),
            Value::U8(n) => write!(f, "{n}"),
            Value::U16(n) => write!(f, "{n}"),
            Value::U32(n) => write!(f, "{n}"),
            Value::U64(n) => write!(f, "{n}"),
            Value::Usize(n) => write!(f, "{n}"),
            Value::F32(n) => write!(f, "{n}"),
            Value::F64(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Value::Runes(r) => write!(f, "{r:?}"),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(m) => {
                f.write_str("{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Struct(s) => {
                write!(f, "{}{{", s.name())?;
                for (i, field) in s.fields().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str("}")
            }
            Value::Time(t) => write!(f, "{}", t.format(TIME_TEXT_LAYOUT)),
            Value::Duration(d) => f.write_str(&format_duration(d)),
            Value::Ptr(Some(inner)) => write!(f, "&{inner}"),
            Value::Named(n) => write!(f, "{}({})", n.name(), n.inner()),
            Value::Opaque(o) => write!(f, "{}{{..}}", o.name()),
        }
    }
}

/// Entries of a mapping, in insertion order.
///
/// Iteration order carries no meaning: converters that need an order sort
/// by each key's canonical text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    /// Insert, replacing the value of an equal key.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Mapping::new();
        for (k, v) in iter {
            m.insert(k, v);
        }
        m
    }
}

/// One member of a struct's field table.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
    /// Anonymous (embedded) member whose own fields are promoted.
    pub embedded: bool,
    /// Unexported members are carried but never introspected.
    pub exported: bool,
}

/// A struct described by its ordered field table.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    fields: Vec<Field>,
    caps: Option<Arc<dyn Capabilities>>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            caps: None,
        }
    }

    /// Append an exported field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            embedded: false,
            exported: true,
        });
        self
    }

    /// Append an embedded member. `value` is usually a `Struct` or a pointer to one.
    pub fn embed(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            embedded: true,
            exported: true,
        });
        self
    }

    /// Append an unexported field.
    pub fn private(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            embedded: false,
            exported: false,
        });
        self
    }

    pub fn with_capabilities(mut self, caps: Arc<dyn Capabilities>) -> Self {
        self.caps = Some(caps);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn capabilities(&self) -> Option<&dyn Capabilities> {
        self.caps.as_deref()
    }
}

impl PartialEq for Struct {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.fields == other.fields && same_caps(&self.caps, &other.caps)
    }
}

/// A named type wrapping an underlying value.
#[derive(Debug, Clone)]
pub struct Named {
    name: String,
    inner: Box<Value>,
    caps: Option<Arc<dyn Capabilities>>,
}

impl Named {
    pub fn new(name: impl Into<String>, inner: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            inner: Box::new(inner.into()),
            caps: None,
        }
    }

    pub fn with_capabilities(mut self, caps: Arc<dyn Capabilities>) -> Self {
        self.caps = Some(caps);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> &Value {
        &self.inner
    }

    pub fn capabilities(&self) -> Option<&dyn Capabilities> {
        self.caps.as_deref()
    }
}

impl PartialEq for Named {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.inner == other.inner && same_caps(&self.caps, &other.caps)
    }
}

impl From<Named> for Value {
    fn from(n: Named) -> Self {
        Value::Named(n)
    }
}

impl From<Struct> for Value {
    fn from(s: Struct) -> Self {
        Value::Struct(s)
    }
}

/// A value with no structure, visible only through its capabilities.
#[derive(Debug, Clone)]
pub struct Opaque {
    name: String,
    caps: Arc<dyn Capabilities>,
}

impl Opaque {
    pub fn new(name: impl Into<String>, caps: Arc<dyn Capabilities>) -> Self {
        Self {
            name: name.into(),
            caps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> &dyn Capabilities {
        self.caps.as_ref()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::addr_eq(Arc::as_ptr(&self.caps), Arc::as_ptr(&other.caps))
    }
}

fn same_caps(a: &Option<Arc<dyn Capabilities>>, b: &Option<Arc<dyn Capabilities>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
        _ => false,
    }
}

#[derive(Debug)]
struct ErrorText(String);

impl Capabilities for ErrorText {
    fn error_message(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Total nanoseconds of a duration, without overflow.
pub fn duration_nanos(d: &TimeDelta) -> i128 {
    i128::from(d.num_seconds()) * 1_000_000_000 + i128::from(d.subsec_nanos())
}

/// Render a duration as `72h3m0.5s`, `1.5ms`, `0s`.
pub fn format_duration(d: &TimeDelta) -> String {
    let total = duration_nanos(d);
    let sign = if total < 0 { "-" } else { "" };
    let n = total.unsigned_abs();

    if n == 0 {
        return "0s".to_string();
    }
    if n < 1_000 {
        return format!("{sign}{n}ns");
    }
    if n < 1_000_000 {
        return format!("{sign}{}µs", fraction(n, 1_000));
    }
    if n < 1_000_000_000 {
        return format!("{sign}{}ms", fraction(n, 1_000_000));
    }

    let hours = n / 3_600_000_000_000;
    let minutes = (n / 60_000_000_000) % 60;
    let seconds = fraction(n % 60_000_000_000, 1_000_000_000);
    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}

// `n / unit` as a decimal with trailing zeros trimmed.
fn fraction(n: u128, unit: u128) -> String {
    let whole = n / unit;
    let rem = n % unit;
    if rem == 0 {
        return whole.to_string();
    }
    let width = unit.ilog10() as usize;
    let digits = format!("{rem:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
