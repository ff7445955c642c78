//! Literal encoding keyed by [`Dialect`].
//!
//! Thin wrappers over [`sqltype_core::escape`] that pick the dialect from the
//! global [`TypeSystem`](crate::TypeSystem), so DATE and BLOB values go
//! through the dialect's own stringifiers.

use crate::registry::types_for;
use sqltype_core::escape::{array_to_list_with, format_named_with, format_with};
use sqltype_core::{Dialect, EncodeError, SqlValue};
use std::collections::BTreeMap;

/// Encode `value` as a literal for `dialect`.
///
/// `format` is set when the literal replaces a placeholder; PostgreSQL
/// arrays then become parenthesized lists instead of `ARRAY[...]`.
pub fn escape(
    value: &SqlValue,
    timezone: Option<&str>,
    dialect: Dialect,
    format: bool,
) -> Result<String, EncodeError> {
    types_for(dialect).escape(value, timezone, format)
}

/// Replace `?` placeholders left to right.
pub fn format(
    sql: &str,
    values: &[SqlValue],
    timezone: Option<&str>,
    dialect: Dialect,
) -> Result<String, EncodeError> {
    format_with(types_for(dialect), sql, values, timezone)
}

/// Replace `:name` placeholders.
pub fn format_named(
    sql: &str,
    values: &BTreeMap<String, SqlValue>,
    timezone: Option<&str>,
    dialect: Dialect,
) -> Result<String, EncodeError> {
    format_named_with(types_for(dialect), sql, values, timezone)
}

/// `1, (2, 3)` rendering of a possibly nested array.
pub fn array_to_list(
    items: &[SqlValue],
    timezone: Option<&str>,
    dialect: Dialect,
    format: bool,
) -> Result<String, EncodeError> {
    array_to_list_with(types_for(dialect), items, timezone, format)
}

/// Convert a JSON document into an encoder value.
///
/// Arrays become [`SqlValue::Array`] so they encode as lists; objects stay
/// JSON and are rejected by the encoder as non-coercible.
pub fn value_from_json(value: serde_json::Value) -> SqlValue {
    match value {
        serde_json::Value::Null => SqlValue::Null,
        serde_json::Value::Bool(b) => SqlValue::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Int(i),
            None => n
                .as_f64()
                .map(SqlValue::Float)
                .unwrap_or_else(|| SqlValue::String(n.to_string())),
        },
        serde_json::Value::String(s) => SqlValue::String(s),
        serde_json::Value::Array(items) => {
            SqlValue::Array(items.into_iter().map(value_from_json).collect())
        }
        object @ serde_json::Value::Object(_) => SqlValue::Json(object),
    }
}
