//! Runtime values handed to the type engine.
//!
//! `SqlValue` is what application code assigns to a column and what the
//! encoder turns into SQL text. It is deliberately loose: a DATE column may
//! receive a string that `sanitize` later turns into a timestamp, and
//! `validate` decides whether the result is acceptable.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value as JsonValue};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A value of any supported logical type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer value
    Int(i64),

    /// IEEE 754 double, including NaN and the infinities
    Float(f64),

    /// Exact decimal
    Decimal(Decimal),

    /// Text value
    String(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// Instant in time
    Timestamp(DateTime<Utc>),

    /// Calendar date without time
    Date(NaiveDate),

    /// UUID value
    Uuid(Uuid),

    /// JSON document (also used for GeoJSON)
    Json(JsonValue),

    /// List of values
    Array(Vec<SqlValue>),

    /// Plain key/value object (HSTORE)
    Object(BTreeMap<String, SqlValue>),

    /// Range with per-bound inclusivity
    Range(RangeValue),
}

/// A range value: zero bounds (empty) or a lower and an upper bound.
///
/// `SqlValue::Null` bounds are unbounded; `Float(±inf)` bounds render as
/// `infinity`/`-infinity`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeValue {
    /// Lower and upper bound, or nothing for the empty range.
    pub bounds: Vec<SqlValue>,
    /// Inclusivity of the lower and upper bound.
    pub inclusive: [bool; 2],
}

impl RangeValue {
    /// Range with the default `[lower, upper)` inclusivity.
    pub fn new(lower: impl Into<SqlValue>, upper: impl Into<SqlValue>) -> Self {
        Self {
            bounds: vec![lower.into(), upper.into()],
            inclusive: [true, false],
        }
    }

    /// The empty range.
    pub fn empty() -> Self {
        Self {
            bounds: Vec::new(),
            inclusive: [false, false],
        }
    }

    /// Set bound inclusivity.
    pub fn with_inclusive(mut self, lower: bool, upper: bool) -> Self {
        self.inclusive = [lower, upper];
        self
    }

    /// Whether this is the empty range.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl SqlValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Truthiness as a dynamic-language caller would see it: null, false,
    /// zero, NaN and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Decimal(d) => !d.is_zero(),
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[SqlValue]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Whether the value is a number of any representation.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_) | Self::Decimal(_))
    }

    /// Text form used by the string-based validators (`String(value)` in a
    /// dynamic language). `None` for values with no meaningful text form.
    pub fn coerce_text(&self) -> Option<String> {
        match self {
            Self::Null => Some("null".to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(format_float(*f)),
            Self::Decimal(d) => Some(d.to_string()),
            Self::String(s) => Some(s.clone()),
            Self::Uuid(u) => Some(u.hyphenated().to_string()),
            Self::Timestamp(ts) => Some(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Self::Json(JsonValue::String(s)) => Some(s.clone()),
            Self::Json(JsonValue::Number(n)) => Some(n.to_string()),
            Self::Json(JsonValue::Bool(b)) => Some(b.to_string()),
            _ => None,
        }
    }

    /// JSON rendering, as used in validation messages and JSON columns.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int(i) => json!(i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::Decimal(d) => serde_json::from_str::<JsonValue>(&d.to_string())
                .unwrap_or_else(|_| JsonValue::String(d.to_string())),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Bytes(b) => json!({ "type": "Buffer", "data": b }),
            Self::Timestamp(ts) => {
                JsonValue::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Date(d) => JsonValue::String(d.format("%Y-%m-%d").to_string()),
            Self::Uuid(u) => JsonValue::String(u.hyphenated().to_string()),
            Self::Json(v) => v.clone(),
            Self::Array(arr) => JsonValue::Array(arr.iter().map(SqlValue::to_json).collect()),
            Self::Object(obj) => JsonValue::Object(
                obj.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Range(range) => {
                JsonValue::Array(range.bounds.iter().map(SqlValue::to_json).collect())
            }
        }
    }

    /// Compact JSON text of [`SqlValue::to_json`].
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

/// Decimal text of a float the way a dynamic language prints numbers:
/// integral values without a fraction, NaN and the infinities spelled out.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let sign = if f < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for SqlValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for SqlValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for SqlValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for SqlValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Decimal> for SqlValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<Uuid> for SqlValue {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<JsonValue> for SqlValue {
    fn from(v: JsonValue) -> Self {
        Self::Json(v)
    }
}

impl From<Vec<SqlValue>> for SqlValue {
    fn from(values: Vec<SqlValue>) -> Self {
        Self::Array(values)
    }
}

impl From<RangeValue> for SqlValue {
    fn from(range: RangeValue) -> Self {
        Self::Range(range)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}
