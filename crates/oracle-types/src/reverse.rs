//! Decoding of values read from Oracle.

use sqltype_core::timezone::{local_text_to_utc, parse_timestamp};
use sqltype_core::{CallOptions, ParseError, SqlValue, TypeKey};

/// Decode a raw driver value of the logical type `key`.
///
/// Booleans are stored as `CHAR(1)` holding `1` or `0`. Timestamps without
/// an offset are local to the session timezone.
pub fn parse(
    key: TypeKey,
    value: SqlValue,
    options: &CallOptions<'_>,
) -> Result<SqlValue, ParseError> {
    match (key, value) {
        (TypeKey::Boolean, SqlValue::String(text)) => match text.trim() {
            "1" => Ok(SqlValue::Bool(true)),
            "0" => Ok(SqlValue::Bool(false)),
            _ => Err(ParseError::mismatch("boolean", &SqlValue::String(text))),
        },
        (TypeKey::Boolean, SqlValue::Int(i)) => Ok(SqlValue::Bool(i != 0)),
        (TypeKey::Date, SqlValue::String(text)) => match parse_timestamp(&text) {
            Some(ts) if has_offset(&text) => Ok(SqlValue::Timestamp(ts)),
            _ => local_text_to_utc(&text, options.timezone).map(SqlValue::Timestamp),
        },
        (_, value) => Ok(value),
    }
}

fn has_offset(text: &str) -> bool {
    let time = text.trim().get(10..).unwrap_or("");
    time.ends_with('Z') || time.contains('+') || time.contains('-')
}
