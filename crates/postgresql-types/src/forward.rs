//! PostgreSQL literal stringification.

use sqltype_core::quote::quote_str;
use sqltype_core::stringify::{
    self, blob_bytes, escape_nested, format_instant, to_date, DATEONLY_FORMAT, DATE_FORMAT,
};
use sqltype_core::{
    CallOptions, DataType, Dialect, DialectTypes, EncodeError, RangeValue, SqlValue, TypeKey,
};
use std::collections::BTreeMap;

/// Stringify `value` as a PostgreSQL literal of `ty`.
pub fn stringify<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    value: &SqlValue,
    options: &CallOptions<'_>,
) -> Result<String, EncodeError> {
    if value.is_null() {
        return Ok("NULL".to_string());
    }
    match ty {
        DataType::Date(_) | DataType::DateOnly => match infinity(value) {
            Some(literal) => Ok(format!("'{literal}'")),
            None => stringify::stringify(types, ty, value, options),
        },
        DataType::Blob(_) => Ok(bytea_literal(&blob_bytes(value)?)),
        DataType::Range(_) => range_literal(value, options),
        DataType::Hstore => hstore_literal(value),
        DataType::Array(array) => {
            let items = match value {
                SqlValue::Array(items) => items.as_slice(),
                other => std::slice::from_ref(other),
            };
            let elements = items
                .iter()
                .map(|item| types.stringify(&array.element, item, options))
                .collect::<Result<Vec<_>, _>>()?;
            let literal = format!("ARRAY[{}]", elements.join(","));
            // Enum labels cast implicitly to the column's enum type
            if matches!(*array.element, DataType::Enum(_)) {
                Ok(literal)
            } else {
                Ok(format!("{literal}::{}", types.to_sql(ty, options)?))
            }
        }
        DataType::Geometry(_) => {
            let geojson = escape_nested(types, &SqlValue::String(value.to_json_string()), options)?;
            Ok(format!("ST_GeomFromGeoJSON({geojson})"))
        }
        _ => stringify::stringify(types, ty, value, options),
    }
}

/// `infinity` or `-infinity` for the values PostgreSQL stores as such.
fn infinity(value: &SqlValue) -> Option<&'static str> {
    match value {
        SqlValue::Float(f) if *f == f64::INFINITY => Some("infinity"),
        SqlValue::Float(f) if *f == f64::NEG_INFINITY => Some("-infinity"),
        SqlValue::String(s) if s == "infinity" => Some("infinity"),
        SqlValue::String(s) if s == "-infinity" => Some("-infinity"),
        _ => None,
    }
}

/// `E'\\x<hex>'`
pub fn bytea_literal(bytes: &[u8]) -> String {
    format!("E'\\\\x{}'", hex::encode(bytes))
}

/// `'[lower,upper)'`, `'empty'`, with unbounded sides left blank.
pub fn range_literal(
    value: &SqlValue,
    options: &CallOptions<'_>,
) -> Result<String, EncodeError> {
    let range_value = match value {
        SqlValue::Range(r) => r.clone(),
        SqlValue::Array(bounds) => RangeValue {
            bounds: bounds.clone(),
            inclusive: [true, false],
        },
        _ => {
            return Err(EncodeError::Unsupported {
                key: TypeKey::Range,
                value: value.to_json_string(),
            })
        }
    };
    if range_value.is_empty() {
        return Ok("'empty'".to_string());
    }
    if range_value.bounds.len() != 2 {
        return Err(EncodeError::RangeArity);
    }
    let lower = range_bound(&range_value.bounds[0], options)?;
    let upper = range_bound(&range_value.bounds[1], options)?;
    let open = if range_value.inclusive[0] { '[' } else { '(' };
    let close = if range_value.inclusive[1] { ']' } else { ')' };
    Ok(quote_str(
        Dialect::Postgres,
        &format!("{open}{lower},{upper}{close}"),
    ))
}

/// Numbers bare, temporal values in their column format, everything else
/// as a JSON string.
fn range_bound(bound: &SqlValue, options: &CallOptions<'_>) -> Result<String, EncodeError> {
    let text = match bound {
        SqlValue::Null => String::new(),
        SqlValue::Float(f) if *f == f64::INFINITY => "infinity".to_string(),
        SqlValue::Float(f) if *f == f64::NEG_INFINITY => "-infinity".to_string(),
        SqlValue::Int(i) => i.to_string(),
        SqlValue::Float(f) => sqltype_core::values::format_float(*f),
        SqlValue::Decimal(d) => d.to_string(),
        SqlValue::Timestamp(ts) => json_quote(&format_instant(ts, options.timezone, DATE_FORMAT)?),
        SqlValue::Date(_) => {
            let date = to_date(&DataType::DateOnly, bound)?;
            json_quote(&date.format(DATEONLY_FORMAT).to_string())
        }
        other => other.to_json_string(),
    };
    Ok(text)
}

fn json_quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// `'"key"=>"value","other"=>NULL'`
pub fn hstore_literal(value: &SqlValue) -> Result<String, EncodeError> {
    let pairs: BTreeMap<String, SqlValue> = match value {
        SqlValue::Object(map) => map.clone(),
        SqlValue::Json(serde_json::Value::Object(map)) => map
            .iter()
            .map(|(k, v)| (k.clone(), SqlValue::Json(v.clone())))
            .collect(),
        other => return Err(EncodeError::NotCoercible(other.to_json_string())),
    };
    let body = pairs
        .iter()
        .map(|(key, item)| {
            let item = match item {
                SqlValue::Null | SqlValue::Json(serde_json::Value::Null) => "NULL".to_string(),
                other => {
                    let text = other
                        .coerce_text()
                        .ok_or_else(|| EncodeError::NotCoercible(other.to_json_string()))?;
                    hstore_quote(&text)
                }
            };
            Ok(format!("{}=>{item}", hstore_quote(key)))
        })
        .collect::<Result<Vec<_>, EncodeError>>()?;
    Ok(quote_str(Dialect::Postgres, &body.join(",")))
}

fn hstore_quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}
