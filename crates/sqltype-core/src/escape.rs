//! Raw value to SQL literal encoding.
//!
//! These functions embed values that are not attached to a column type,
//! such as the operands of a generated `WHERE` clause. They are generic over
//! the dialect so that temporal and binary values go through the dialect's
//! own DATE and BLOB stringifiers.

use crate::dialect::{CallOptions, Dialect, DialectTypes};
use crate::error::{EncodeError, Result};
use crate::quote::quote_str;
use crate::types::{DataType, SizedOptions};
use crate::values::{format_float, SqlValue};
use std::collections::BTreeMap;

/// Encode `value` as a literal. `format` marks placeholder substitution,
/// where PostgreSQL arrays become parenthesized lists instead of `ARRAY[]`.
pub fn escape_with<T: DialectTypes + ?Sized>(
    types: &T,
    value: &SqlValue,
    timezone: Option<&str>,
    format: bool,
) -> Result<String> {
    let dialect = types.dialect();
    let options = CallOptions {
        timezone,
        ..CallOptions::default()
    };
    match value {
        SqlValue::Null => Ok("NULL".to_string()),
        SqlValue::Bool(b) => Ok(bool_literal(dialect, *b).to_string()),
        SqlValue::Int(i) => Ok(i.to_string()),
        SqlValue::Float(f) => Ok(format_float(*f)),
        SqlValue::Decimal(d) => Ok(d.to_string()),
        SqlValue::String(s) => Ok(quote_str(dialect, s)),
        SqlValue::Timestamp(_) => types.stringify(&DataType::date(None), value, &options),
        SqlValue::Date(_) => types.stringify(&DataType::DateOnly, value, &options),
        SqlValue::Bytes(_) => {
            types.stringify(&DataType::blob(SizedOptions::default()), value, &options)
        }
        SqlValue::Array(items) => {
            if dialect == Dialect::Postgres && !format {
                let elements = items
                    .iter()
                    .map(|item| escape_with(types, item, timezone, format))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("ARRAY[{}]", elements.join(",")))
            } else {
                array_to_list_with(types, items, timezone, format)
            }
        }
        other => other
            .coerce_text()
            .map(|text| quote_str(dialect, &text))
            .ok_or_else(|| EncodeError::NotCoercible(other.to_json_string())),
    }
}

/// `1`/`0` where the dialect has no boolean literal, `true`/`false`
/// elsewhere.
pub fn bool_literal(dialect: Dialect, value: bool) -> &'static str {
    match (dialect, value) {
        (Dialect::Sqlite | Dialect::Mssql | Dialect::Oracle, true) => "1",
        (Dialect::Sqlite | Dialect::Mssql | Dialect::Oracle, false) => "0",
        (_, true) => "true",
        (_, false) => "false",
    }
}

/// Join escaped elements with `, `; nested arrays become parenthesized
/// groups.
pub fn array_to_list_with<T: DialectTypes + ?Sized>(
    types: &T,
    items: &[SqlValue],
    timezone: Option<&str>,
    format: bool,
) -> Result<String> {
    let parts = items
        .iter()
        .map(|item| match item {
            SqlValue::Array(nested) => Ok(format!(
                "({})",
                array_to_list_with(types, nested, timezone, format)?
            )),
            other => escape_with(types, other, timezone, format),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join(", "))
}

/// Replace each `?` with the next value, left to right. Placeholders beyond
/// the supplied values are left as they are.
pub fn format_with<T: DialectTypes + ?Sized>(
    types: &T,
    sql: &str,
    values: &[SqlValue],
    timezone: Option<&str>,
) -> Result<String> {
    let mut out = String::with_capacity(sql.len());
    let mut remaining = values.iter();
    for c in sql.chars() {
        if c == '?' {
            if let Some(value) = remaining.next() {
                out.push_str(&escape_with(types, value, timezone, true)?);
                continue;
            }
        }
        out.push(c);
    }
    Ok(out)
}

/// Replace each `:name` token with the named value. PostgreSQL `::cast`
/// tokens pass through; in other dialects every token must resolve.
pub fn format_named_with<T: DialectTypes + ?Sized>(
    types: &T,
    sql: &str,
    values: &BTreeMap<String, SqlValue>,
    timezone: Option<&str>,
) -> Result<String> {
    let dialect = types.dialect();
    let bytes = sql.as_bytes();
    let mut out = String::with_capacity(sql.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b':' {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i] == b':' {
            i += 1;
        }
        let name_start = i;
        if i >= bytes.len() || !is_word(bytes[i]) || bytes[i].is_ascii_digit() {
            continue;
        }
        while i < bytes.len() && is_word(bytes[i]) {
            i += 1;
        }
        let token = &sql[start..i];
        let name = &sql[name_start..i];
        out.push_str(&sql[copied..start]);
        copied = i;

        if dialect == Dialect::Postgres && token.starts_with("::") {
            out.push_str(token);
            continue;
        }
        match values.get(name) {
            Some(value) => out.push_str(&escape_with(types, value, timezone, true)?),
            None => return Err(EncodeError::MissingNamedParameter(token.to_string())),
        }
    }
    out.push_str(&sql[copied..]);
    Ok(out)
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
