use bytes::Bytes;
use chrono::{DateTime, Utc};

/// One column value of a record.
///
/// `None` columns (`Option<Value>`) are skipped entirely: no tag, no
/// checksum contribution.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Bigint(i64),
    Double(f64),
    String(Bytes),
    /// Written as sint64 milliseconds since the Unix epoch.
    Datetime(DateTime<Utc>),
    /// Written as its decimal text.
    Decimal(String),
    Array(Vec<Option<Value>>),
    /// Written as the key array followed by the value array.
    Map(Vec<(Option<Value>, Option<Value>)>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Bigint(_) => "bigint",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Datetime(_) => "datetime",
            Value::Decimal(_) => "decimal",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    /// Kinds allowed as array / map elements.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Boolean(_) | Value::Bigint(_) | Value::Double(_) | Value::String(_)
        )
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Bytes::copy_from_slice(s.as_ref().as_bytes()))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Bigint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Datetime(v)
    }
}
