//! Decoding of values read by the MySQL driver.
//!
//! The driver hands DATETIME columns over as wall-clock text, GEOMETRY
//! columns as the internal storage format (a 4-byte SRID followed by WKB),
//! and JSON columns as text.

use sqltype_core::geometry::{geometry_to_geojson, read_wkb};
use sqltype_core::timezone::local_text_to_utc;
use sqltype_core::{CallOptions, ParseError, SqlValue, TypeKey};

/// Length of the SRID prefix on MySQL geometry values.
const SRID_PREFIX_LEN: usize = 4;

/// Decode a raw driver value of the logical type `key`.
pub fn parse(
    key: TypeKey,
    value: SqlValue,
    options: &CallOptions<'_>,
) -> Result<SqlValue, ParseError> {
    if value.is_null() {
        return Ok(SqlValue::Null);
    }
    match key {
        TypeKey::Date => parse_datetime(value, options.timezone),
        TypeKey::Geometry => parse_geometry(value),
        TypeKey::Json => parse_json(value),
        _ => Ok(value),
    }
}

/// DATETIME text is wall-clock time in the connection timezone, a named
/// zone or a `+HH:MM` offset.
fn parse_datetime(value: SqlValue, timezone: Option<&str>) -> Result<SqlValue, ParseError> {
    match value {
        SqlValue::String(text) => Ok(SqlValue::Timestamp(local_text_to_utc(&text, timezone)?)),
        SqlValue::Timestamp(_) => Ok(value),
        other => Err(ParseError::mismatch("datetime text", &other)),
    }
}

fn parse_geometry(value: SqlValue) -> Result<SqlValue, ParseError> {
    let bytes = match &value {
        SqlValue::Bytes(bytes) => bytes,
        other => return Err(ParseError::mismatch("geometry buffer", other)),
    };
    if bytes.is_empty() {
        return Ok(SqlValue::Null);
    }
    if bytes.len() <= SRID_PREFIX_LEN {
        return Err(ParseError::InvalidWkb(format!(
            "geometry value of {} bytes has no WKB after the SRID",
            bytes.len()
        )));
    }
    let geometry = read_wkb(&bytes[SRID_PREFIX_LEN..])?;
    Ok(SqlValue::Json(geometry_to_geojson(&geometry)))
}

fn parse_json(value: SqlValue) -> Result<SqlValue, ParseError> {
    let text = match &value {
        SqlValue::String(text) => text.as_str(),
        SqlValue::Bytes(bytes) => std::str::from_utf8(bytes)
            .map_err(|e| ParseError::InvalidJson(e.to_string()))?,
        _ => return Ok(value),
    };
    serde_json::from_str(text)
        .map(SqlValue::Json)
        .map_err(|e| ParseError::InvalidJson(e.to_string()))
}
