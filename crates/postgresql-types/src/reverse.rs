//! Decoding of values read from PostgreSQL in text format.
//!
//! Booleans arrive as `t`/`f`, ranges and hstore columns in their output
//! syntax, PostGIS columns as hex-encoded EWKB.

use rust_decimal::Decimal;
use sqltype_core::geometry::{geometry_to_geojson, read_wkb};
use sqltype_core::timezone::parse_timestamp;
use sqltype_core::{CallOptions, ParseError, RangeValue, SqlValue, TypeKey};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Decode a raw driver value of the logical type `key`.
pub fn parse(
    key: TypeKey,
    value: SqlValue,
    _options: &CallOptions<'_>,
) -> Result<SqlValue, ParseError> {
    if value.is_null() {
        return Ok(SqlValue::Null);
    }
    match key {
        TypeKey::Boolean => parse_boolean(value),
        TypeKey::Date => parse_timestamptz(value),
        TypeKey::DateOnly => Ok(match infinity(&value) {
            Some(f) => SqlValue::Float(f),
            None => value,
        }),
        TypeKey::Range => match value {
            SqlValue::String(text) => parse_range(&text).map(SqlValue::Range),
            other => Ok(other),
        },
        TypeKey::Hstore => match value {
            SqlValue::String(text) => parse_hstore(&text).map(SqlValue::Object),
            other => Ok(other),
        },
        TypeKey::Geometry | TypeKey::Geography => parse_geometry(value),
        TypeKey::Json | TypeKey::Jsonb => match value {
            SqlValue::String(text) => serde_json::from_str(&text)
                .map(SqlValue::Json)
                .map_err(|e| ParseError::InvalidJson(e.to_string())),
            other => Ok(other),
        },
        _ => Ok(value),
    }
}

fn parse_boolean(value: SqlValue) -> Result<SqlValue, ParseError> {
    match &value {
        SqlValue::Bool(_) => Ok(value),
        SqlValue::String(s) => match s.as_str() {
            "t" | "true" => Ok(SqlValue::Bool(true)),
            "f" | "false" => Ok(SqlValue::Bool(false)),
            _ => Err(ParseError::mismatch("boolean", &value)),
        },
        other => Err(ParseError::mismatch("boolean", other)),
    }
}

fn infinity(value: &SqlValue) -> Option<f64> {
    match value.as_str()? {
        "infinity" => Some(f64::INFINITY),
        "-infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn parse_timestamptz(value: SqlValue) -> Result<SqlValue, ParseError> {
    if let Some(f) = infinity(&value) {
        return Ok(SqlValue::Float(f));
    }
    match value {
        SqlValue::String(text) => parse_timestamp(&text)
            .map(SqlValue::Timestamp)
            .ok_or(ParseError::InvalidDateTime(text)),
        other => Ok(other),
    }
}

/// Parse range output syntax: `[1,5)`, `(,10]`, `empty`.
pub fn parse_range(text: &str) -> Result<RangeValue, ParseError> {
    let text = text.trim();
    if text == "empty" {
        return Ok(RangeValue::empty());
    }
    let invalid = || ParseError::mismatch("range", &SqlValue::from(text));
    let mut chars = text.chars();
    let lower_inclusive = match chars.next() {
        Some('[') => true,
        Some('(') => false,
        _ => return Err(invalid()),
    };
    let upper_inclusive = match chars.next_back() {
        Some(']') => true,
        Some(')') => false,
        _ => return Err(invalid()),
    };
    let bounds = split_bounds(chars.as_str()).ok_or_else(invalid)?;
    if bounds.len() != 2 {
        return Err(invalid());
    }
    let mut range = RangeValue::new(range_bound(&bounds[0]), range_bound(&bounds[1]));
    range.inclusive = [lower_inclusive, upper_inclusive];
    Ok(range)
}

/// A range bound token. `quoted` tokens are never numbers.
struct BoundToken {
    text: String,
    quoted: bool,
}

fn split_bounds(body: &str) -> Option<Vec<BoundToken>> {
    let mut tokens = Vec::new();
    let mut current = BoundToken {
        text: String::new(),
        quoted: false,
    };
    let mut in_quotes = false;
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.quoted = true;
            }
            '\\' => current.text.push(chars.next()?),
            ',' if !in_quotes => {
                tokens.push(std::mem::replace(
                    &mut current,
                    BoundToken {
                        text: String::new(),
                        quoted: false,
                    },
                ));
            }
            other => current.text.push(other),
        }
    }
    if in_quotes {
        return None;
    }
    tokens.push(current);
    Some(tokens)
}

fn range_bound(token: &BoundToken) -> SqlValue {
    let text = token.text.as_str();
    if !token.quoted {
        match text {
            "" => return SqlValue::Null,
            "infinity" => return SqlValue::Float(f64::INFINITY),
            "-infinity" => return SqlValue::Float(f64::NEG_INFINITY),
            _ => {}
        }
        if let Ok(i) = text.parse::<i64>() {
            return SqlValue::Int(i);
        }
        if let Ok(d) = Decimal::from_str(text) {
            return SqlValue::Decimal(d);
        }
    }
    if text.len() > 10 {
        if let Some(ts) = parse_timestamp(text) {
            return SqlValue::Timestamp(ts);
        }
    }
    SqlValue::String(text.to_string())
}

/// Parse hstore output syntax: `"a"=>"1", "b"=>NULL`.
pub fn parse_hstore(text: &str) -> Result<BTreeMap<String, SqlValue>, ParseError> {
    let invalid = || ParseError::mismatch("hstore", &SqlValue::from(text));
    let mut map = BTreeMap::new();
    let mut rest = text.trim();
    while !rest.is_empty() {
        let (key, after_key) = read_quoted(rest).ok_or_else(invalid)?;
        let after_arrow = after_key
            .trim_start()
            .strip_prefix("=>")
            .ok_or_else(invalid)?
            .trim_start();
        let (item, after_item) = if let Some(after_null) = after_arrow.strip_prefix("NULL") {
            (SqlValue::Null, after_null)
        } else {
            let (item, after_item) = read_quoted(after_arrow).ok_or_else(invalid)?;
            (SqlValue::String(item), after_item)
        };
        map.insert(key, item);
        rest = after_item.trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
        } else if !rest.is_empty() {
            return Err(invalid());
        }
    }
    Ok(map)
}

/// Read a `"..."` token with backslash escapes, returning the unescaped
/// text and the remainder.
fn read_quoted(text: &str) -> Option<(String, &str)> {
    let body = text.strip_prefix('"')?;
    let mut out = String::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => out.push(chars.next()?.1),
            '"' => return Some((out, &body[i + 1..])),
            other => out.push(other),
        }
    }
    None
}

fn parse_geometry(value: SqlValue) -> Result<SqlValue, ParseError> {
    let bytes = match &value {
        SqlValue::String(text) => {
            hex::decode(text.trim()).map_err(|e| ParseError::InvalidWkb(e.to_string()))?
        }
        SqlValue::Bytes(bytes) => bytes.clone(),
        _ => return Ok(value),
    };
    let geometry = read_wkb(&bytes)?;
    Ok(SqlValue::Json(geometry_to_geojson(&geometry)))
}
