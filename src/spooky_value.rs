use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use smol_str::SmolStr;
use std::fmt;

/// Object members in insertion order, so JSON objects keep their key order at
/// every nesting level.
pub type ObjectMap<K, V> = IndexMap<K, V>;

// ─── SpookyValue ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpookyNumber {
    I64(i64),
    U64(u64),
    F64(f64),
}

/// Default field value type of a [`RecordType`](crate::RecordType).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpookyValue {
    #[default]
    Null,
    Bool(bool),
    Number(SpookyNumber),
    Str(SmolStr),
    Array(Vec<SpookyValue>),
    Object(ObjectMap<SmolStr, SpookyValue>),
}

impl SpookyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SpookyValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer value, if it fits. Floats are never truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            SpookyValue::Number(SpookyNumber::I64(i)) => Some(i),
            SpookyValue::Number(SpookyNumber::U64(u)) => i64::try_from(u).ok(),
            _ => None,
        }
    }

    /// Unsigned integer value, if it fits. Floats are never truncated.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            SpookyValue::Number(SpookyNumber::U64(u)) => Some(u),
            SpookyValue::Number(SpookyNumber::I64(i)) => u64::try_from(i).ok(),
            _ => None,
        }
    }
}

// ─── Display ────────────────────────────────────────────────────────────────

/// JSON-like rendering: strings use JSON quoting, object members are
/// written `key: value` in insertion order.
impl fmt::Display for SpookyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpookyValue::Null => f.write_str("null"),
            SpookyValue::Bool(b) => write!(f, "{b}"),
            SpookyValue::Number(SpookyNumber::I64(i)) => write!(f, "{i}"),
            SpookyValue::Number(SpookyNumber::U64(u)) => write!(f, "{u}"),
            SpookyValue::Number(SpookyNumber::F64(x)) => write!(f, "{x}"),
            SpookyValue::Str(s) => {
                let quoted = serde_json::to_string(s.as_str()).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            SpookyValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            SpookyValue::Object(members) if members.is_empty() => f.write_str("{}"),
            SpookyValue::Object(members) => {
                f.write_str("{ ")?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str(" }")
            }
        }
    }
}

// ─── Serialize ──────────────────────────────────────────────────────────────

impl Serialize for SpookyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SpookyValue::Null => serializer.serialize_unit(),
            SpookyValue::Bool(b) => serializer.serialize_bool(*b),
            SpookyValue::Number(SpookyNumber::I64(i)) => serializer.serialize_i64(*i),
            SpookyValue::Number(SpookyNumber::U64(u)) => serializer.serialize_u64(*u),
            SpookyValue::Number(SpookyNumber::F64(x)) => serializer.serialize_f64(*x),
            SpookyValue::Str(s) => serializer.serialize_str(s),
            SpookyValue::Array(items) => serializer.collect_seq(items),
            SpookyValue::Object(members) => {
                serializer.collect_map(members.iter().map(|(k, v)| (k.as_str(), v)))
            }
        }
    }
}

// ─── Conversions ────────────────────────────────────────────────────────────

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for SpookyValue {
                fn from(n: $ty) -> Self {
                    SpookyValue::Number(SpookyNumber::$variant(n))
                }
            }
        )*
    };
}

number_from!(i64 => I64, u64 => U64, f64 => F64);

impl From<bool> for SpookyValue {
    fn from(b: bool) -> Self {
        SpookyValue::Bool(b)
    }
}

impl From<&str> for SpookyValue {
    fn from(s: &str) -> Self {
        SpookyValue::Str(SmolStr::new(s))
    }
}

impl From<String> for SpookyValue {
    fn from(s: String) -> Self {
        SpookyValue::Str(SmolStr::from(s))
    }
}

impl From<SmolStr> for SpookyValue {
    fn from(s: SmolStr) -> Self {
        SpookyValue::Str(s)
    }
}

impl From<Vec<SpookyValue>> for SpookyValue {
    fn from(items: Vec<SpookyValue>) -> Self {
        SpookyValue::Array(items)
    }
}

impl From<serde_json::Value> for SpookyValue {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => SpookyValue::Null,
            Json::Bool(b) => SpookyValue::Bool(b),
            Json::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => SpookyValue::from(i),
                (None, Some(u), _) => SpookyValue::from(u),
                (None, None, x) => SpookyValue::from(x.unwrap_or(0.0)),
            },
            Json::String(s) => SpookyValue::from(s),
            Json::Array(items) => items.into_iter().map(SpookyValue::from).collect(),
            Json::Object(members) => SpookyValue::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (SmolStr::from(k), SpookyValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<SpookyValue> for serde_json::Value {
    fn from(value: SpookyValue) -> Self {
        use serde_json::Value as Json;
        match value {
            SpookyValue::Null => Json::Null,
            SpookyValue::Bool(b) => Json::Bool(b),
            SpookyValue::Number(SpookyNumber::I64(i)) => Json::from(i),
            SpookyValue::Number(SpookyNumber::U64(u)) => Json::from(u),
            // Non-finite floats have no JSON form and become null.
            SpookyValue::Number(SpookyNumber::F64(x)) => Json::from(x),
            SpookyValue::Str(s) => Json::String(s.into()),
            SpookyValue::Array(items) => items.into_iter().map(Json::from).collect(),
            SpookyValue::Object(members) => Json::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k.into(), Json::from(v)))
                    .collect(),
            ),
        }
    }
}

impl FromIterator<SpookyValue> for SpookyValue {
    fn from_iter<I: IntoIterator<Item = SpookyValue>>(iter: I) -> Self {
        SpookyValue::Array(iter.into_iter().collect())
    }
}

/// Build an insertion-ordered list of field defaults for
/// [`RecordType::define`](crate::RecordType::define).
///
/// ```
/// use spooky_record::{defaults, RecordType};
///
/// let point = RecordType::define(defaults! { "x" => 0i64, "y" => 0i64 }, Some("Point")).unwrap();
/// assert_eq!(point.fields().count(), 2);
/// ```
#[macro_export]
macro_rules! defaults {
    ($($key:expr => $val:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut fields: Vec<($crate::smol_str::SmolStr, $crate::SpookyValue)> = Vec::new();
        $(
            fields.push((
                $crate::smol_str::SmolStr::new($key),
                $crate::SpookyValue::from($val),
            ));
        )*
        fields
    }};
}
