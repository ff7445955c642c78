//! Base value stringification.
//!
//! The result is always a complete literal that can be spliced into SQL
//! text. Families without their own rule hand the value to the dialect's
//! encoder.

use crate::dialect::{CallOptions, Dialect, DialectTypes};
use crate::error::EncodeError;
use crate::geometry::{geojson_to_geometry, to_wkt};
use crate::quote::quote_str;
use crate::timezone::{apply_timezone, parse_timestamp};
use crate::types::DataType;
use crate::values::{format_float, SqlValue};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// `YYYY-MM-DD HH:mm:ss.SSS +HH:MM`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

/// `YYYY-MM-DD`
pub const DATEONLY_FORMAT: &str = "%Y-%m-%d";

/// Stringify `value` as a literal of `ty` with the base rules.
pub fn stringify<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    value: &SqlValue,
    options: &CallOptions<'_>,
) -> Result<String, EncodeError> {
    if value.is_null() {
        return Ok("NULL".to_string());
    }
    let dialect = types.dialect();
    match ty {
        DataType::Numeric(n) if n.kind.is_floating() => Ok(float_literal(dialect, value)),
        DataType::Date(_) => {
            let text = format_instant(&to_instant(ty, value)?, options.timezone, DATE_FORMAT)?;
            Ok(quote_str(dialect, &text))
        }
        DataType::DateOnly => {
            let text = to_date(ty, value)?.format(DATEONLY_FORMAT).to_string();
            Ok(quote_str(dialect, &text))
        }
        DataType::Json | DataType::Jsonb => Ok(quote_str(dialect, &value.to_json_string())),
        DataType::Blob(_) => Ok(format!("X'{}'", hex::encode(blob_bytes(value)?))),
        DataType::Geometry(_) => {
            let wkt = geometry_wkt(value)?;
            let wkt = escape_nested(types, &SqlValue::String(wkt), options)?;
            Ok(format!("ST_GeomFromText({wkt})"))
        }
        DataType::Virtual(v) => match &v.return_type {
            Some(return_type) => types.stringify(return_type, value, options),
            None => escape_nested(types, value, options),
        },
        _ => escape_nested(types, value, options),
    }
}

/// `'NaN'`, `'Infinity'`, `'-Infinity'` or the quoted decimal text.
pub fn float_literal(dialect: Dialect, value: &SqlValue) -> String {
    match value {
        SqlValue::Float(f) => format!("'{}'", format_float(*f)),
        SqlValue::Int(i) => format!("'{i}'"),
        SqlValue::Decimal(d) => format!("'{d}'"),
        other => match other.coerce_text() {
            Some(text) => quote_str(dialect, &text),
            None => quote_str(dialect, &other.to_json_string()),
        },
    }
}

/// Embed a nested value with the caller's escape callback, or the dialect
/// encoder when there is none.
pub fn escape_nested<T: DialectTypes + ?Sized>(
    types: &T,
    value: &SqlValue,
    options: &CallOptions<'_>,
) -> Result<String, EncodeError> {
    match options.escape {
        Some(escape) => escape(value),
        None => types.escape(value, options.timezone, false),
    }
}

/// The instant a DATE value denotes. Strings are parsed, integers are
/// milliseconds since the epoch, calendar dates are midnight UTC.
pub fn to_instant(ty: &DataType, value: &SqlValue) -> Result<DateTime<Utc>, EncodeError> {
    let instant = match value {
        SqlValue::Timestamp(ts) => Some(*ts),
        SqlValue::Date(d) => d.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()),
        SqlValue::Int(ms) => Utc.timestamp_millis_opt(*ms).single(),
        SqlValue::String(s) => parse_timestamp(s),
        _ => None,
    };
    instant.ok_or_else(|| unsupported(ty, value))
}

/// The calendar date a DATEONLY value denotes.
pub fn to_date(ty: &DataType, value: &SqlValue) -> Result<NaiveDate, EncodeError> {
    match value {
        SqlValue::Date(d) => Ok(*d),
        SqlValue::String(s) => NaiveDate::parse_from_str(s.trim(), DATEONLY_FORMAT)
            .ok()
            .or_else(|| parse_timestamp(s).map(|ts| ts.date_naive()))
            .ok_or_else(|| unsupported(ty, value)),
        other => Ok(to_instant(ty, other)?.date_naive()),
    }
}

/// Format `instant` in `timezone` with a chrono pattern.
pub fn format_instant(
    instant: &DateTime<Utc>,
    timezone: Option<&str>,
    pattern: &str,
) -> Result<String, EncodeError> {
    Ok(apply_timezone(instant, timezone)?.format(pattern).to_string())
}

/// Raw bytes of a BLOB value: byte buffers as-is, arrays of integers in
/// `0..=255` as bytes, anything else as its UTF-8 text.
pub fn blob_bytes(value: &SqlValue) -> Result<Vec<u8>, EncodeError> {
    match value {
        SqlValue::Bytes(b) => Ok(b.clone()),
        SqlValue::Array(items) => items
            .iter()
            .map(|item| match item {
                SqlValue::Int(i) => u8::try_from(*i)
                    .map_err(|_| EncodeError::NotCoercible(format!("byte {i} is out of range"))),
                other => Err(EncodeError::NotCoercible(format!(
                    "{} is not a byte",
                    other.to_json_string()
                ))),
            })
            .collect(),
        other => Ok(other
            .coerce_text()
            .unwrap_or_else(|| other.to_json_string())
            .into_bytes()),
    }
}

/// WKT for a GeoJSON value.
pub fn geometry_wkt(value: &SqlValue) -> Result<String, EncodeError> {
    Ok(to_wkt(&geojson_to_geometry(&value.to_json())?))
}

pub(crate) fn unsupported(ty: &DataType, value: &SqlValue) -> EncodeError {
    EncodeError::Unsupported {
        key: ty.key(),
        value: value.to_json_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::BaseTypes;
    use crate::types::{GeometryType, NumericOptions, SizedOptions};
    use serde_json::json;

    fn render(dialect: Dialect, ty: &DataType, value: impl Into<SqlValue>) -> String {
        BaseTypes::new(dialect)
            .stringify(ty, &value.into(), &CallOptions::new())
            .unwrap()
    }

    #[test]
    fn test_float_specials_are_quoted() {
        for ty in [
            DataType::float(NumericOptions::default()),
            DataType::real(NumericOptions::default()),
            DataType::double(NumericOptions::default()),
        ] {
            assert_eq!(render(Dialect::MySql, &ty, f64::NAN), "'NaN'");
            assert_eq!(render(Dialect::MySql, &ty, f64::INFINITY), "'Infinity'");
            assert_eq!(render(Dialect::MySql, &ty, f64::NEG_INFINITY), "'-Infinity'");
        }
        let ty = DataType::float(NumericOptions::default());
        assert_eq!(render(Dialect::MySql, &ty, 1.5), "'1.5'");
    }

    #[test]
    fn test_blob_hex() {
        let ty = DataType::blob(SizedOptions::default());
        assert_eq!(render(Dialect::MySql, &ty, vec![0xABu8, 0xCD]), "X'abcd'");
        assert_eq!(render(Dialect::Sqlite, &ty, "hi"), "X'6869'");
    }

    #[test]
    fn test_blob_byte_arrays() {
        let bytes = |items: Vec<SqlValue>| blob_bytes(&SqlValue::Array(items));
        assert_eq!(
            bytes(vec![SqlValue::Int(0), SqlValue::Int(255)]).unwrap(),
            vec![0x00, 0xFF]
        );
        for bad in [SqlValue::Int(300), SqlValue::Int(-1), SqlValue::from("x")] {
            assert!(matches!(
                bytes(vec![bad]),
                Err(EncodeError::NotCoercible(_))
            ));
        }
    }

    #[test]
    fn test_date_stringify() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        let ty = DataType::date(None);
        assert_eq!(
            render(Dialect::Postgres, &ty, ts),
            "'2020-01-02 03:04:05.000 +00:00'"
        );
        let options = CallOptions::new().with_timezone("+05:30");
        assert_eq!(
            BaseTypes::new(Dialect::Postgres)
                .stringify(&ty, &SqlValue::Timestamp(ts), &options)
                .unwrap(),
            "'2020-01-02 08:34:05.000 +05:30'"
        );
        assert_eq!(render(Dialect::Postgres, &DataType::DateOnly, ts), "'2020-01-02'");
        assert!(BaseTypes::new(Dialect::Postgres)
            .stringify(&ty, &SqlValue::from("soon"), &CallOptions::new())
            .is_err());
    }

    #[test]
    fn test_json_and_geometry() {
        assert_eq!(
            render(Dialect::Postgres, &DataType::Json, json!({"a": "it's"})),
            r#"'{"a":"it''s"}'"#
        );
        let point = json!({ "type": "Point", "coordinates": [1, 2] });
        assert_eq!(
            render(
                Dialect::MySql,
                &DataType::Geometry(GeometryType::geometry(None, None)),
                point
            ),
            "ST_GeomFromText('POINT(1 2)')"
        );
    }

    #[test]
    fn test_identity_types_use_the_encoder() {
        assert_eq!(render(Dialect::Postgres, &DataType::string(10), "O'Brien"), "'O''Brien'");
        assert_eq!(render(Dialect::Mssql, &DataType::Boolean, true), "1");
        assert_eq!(render(Dialect::MySql, &DataType::string(10), SqlValue::Null), "NULL");
    }
}
