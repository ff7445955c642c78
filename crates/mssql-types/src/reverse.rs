//! Decoding of values read from SQL Server.

use sqltype_core::timezone::parse_timestamp;
use sqltype_core::{CallOptions, ParseError, SqlValue, TypeKey};

/// Decode a raw driver value of the logical type `key`.
///
/// `BIT` columns may arrive as integers, `DATETIMEOFFSET` columns as text
/// with an offset.
pub fn parse(
    key: TypeKey,
    value: SqlValue,
    _options: &CallOptions<'_>,
) -> Result<SqlValue, ParseError> {
    match (key, value) {
        (TypeKey::Boolean, SqlValue::Int(i)) => Ok(SqlValue::Bool(i != 0)),
        (TypeKey::Date, SqlValue::String(text)) => parse_timestamp(&text)
            .map(SqlValue::Timestamp)
            .ok_or(ParseError::InvalidDateTime(text)),
        (TypeKey::Uuid, SqlValue::String(text)) => Ok(SqlValue::String(text.to_lowercase())),
        (_, value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn decode(key: TypeKey, value: impl Into<SqlValue>) -> Result<SqlValue, ParseError> {
        parse(key, value.into(), &CallOptions::new())
    }

    #[test]
    fn test_bit_values() {
        assert_eq!(decode(TypeKey::Boolean, 1).unwrap(), SqlValue::Bool(true));
        assert_eq!(decode(TypeKey::Boolean, 0).unwrap(), SqlValue::Bool(false));
        assert_eq!(decode(TypeKey::Boolean, false).unwrap(), SqlValue::Bool(false));
    }

    #[test]
    fn test_datetimeoffset_text() {
        assert_eq!(
            decode(TypeKey::Date, "2020-01-02 05:04:05.000 +02:00").unwrap(),
            SqlValue::Timestamp(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap())
        );
        assert!(decode(TypeKey::Date, "yesterday").is_err());
    }

    #[test]
    fn test_uniqueidentifier_is_lowercased() {
        assert_eq!(
            decode(TypeKey::Uuid, "6F9619FF-8B86-D011-B42D-00C04FC964FF").unwrap(),
            SqlValue::from("6f9619ff-8b86-d011-b42d-00c04fc964ff")
        );
    }
}
