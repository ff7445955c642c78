//! MySQL literal stringification.

use sqltype_core::quote::quote_str;
use sqltype_core::stringify::{self, format_instant, to_instant};
use sqltype_core::{
    CallOptions, DataType, Dialect, DialectTypes, EncodeError, Operation, SqlValue,
};

/// `DATETIME` text without fractional seconds.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `DATETIME(n)` text with milliseconds.
pub const DATETIME_FRACTION_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Stringify `value` as a MySQL literal of `ty`.
pub fn stringify<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    value: &SqlValue,
    options: &CallOptions<'_>,
) -> Result<String, EncodeError> {
    if value.is_null() {
        return Ok("NULL".to_string());
    }
    match (ty, value) {
        // MySQL DATETIME has no offset; the value is written in the
        // connection timezone.
        (DataType::Date(d), _) => {
            let pattern = if d.length.is_some() {
                DATETIME_FRACTION_FORMAT
            } else {
                DATETIME_FORMAT
            };
            let text = format_instant(&to_instant(ty, value)?, options.timezone, pattern)?;
            Ok(quote_str(Dialect::MySql, &text))
        }
        // A string compared against a JSON column is a path or raw JSON
        // text, not a value to serialize again.
        (DataType::Json, SqlValue::String(s)) if options.operation == Some(Operation::Where) => {
            Ok(quote_str(Dialect::MySql, s))
        }
        _ => stringify::stringify(types, ty, value, options),
    }
}

#[cfg(test)]
mod tests {
    use crate::MySqlTypes;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use sqltype_core::{
        CallOptions, DataType, DialectTypes, GeometryType, Operation, SizedOptions, SqlValue,
    };

    fn render(ty: &DataType, value: impl Into<SqlValue>, options: &CallOptions<'_>) -> String {
        MySqlTypes::new()
            .stringify(ty, &value.into(), options)
            .unwrap()
    }

    #[test]
    fn test_datetime_fraction_only_with_length() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(120);
        assert_eq!(
            render(&DataType::date(None), ts, &CallOptions::new()),
            "'2020-01-02 03:04:05'"
        );
        assert_eq!(
            render(&DataType::date(Some(3)), ts, &CallOptions::new()),
            "'2020-01-02 03:04:05.120'"
        );
        assert_eq!(
            render(
                &DataType::date(None),
                ts,
                &CallOptions::new().with_timezone("Europe/Berlin")
            ),
            "'2020-01-02 04:04:05'"
        );
    }

    #[test]
    fn test_escape_uses_mysql_date_rendering() {
        let ts = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        let types = MySqlTypes::new();
        assert_eq!(
            types.escape(&SqlValue::Timestamp(ts), None, false).unwrap(),
            "'2021-06-01 12:00:00'"
        );
    }

    #[test]
    fn test_json_where_keeps_raw_string() {
        let where_clause = CallOptions::new().with_operation(Operation::Where);
        assert_eq!(render(&DataType::Json, "$.a", &where_clause), "'$.a'");
        assert_eq!(
            render(&DataType::Json, "$.a", &CallOptions::new()),
            "'\\\"$.a\\\"'"
        );
        assert_eq!(
            render(&DataType::Json, json!({"a": 1}), &where_clause),
            "'{\\\"a\\\":1}'"
        );
    }

    #[test]
    fn test_base_rules_still_apply() {
        assert_eq!(
            render(
                &DataType::blob(SizedOptions::default()),
                vec![0xABu8, 0xCD],
                &CallOptions::new()
            ),
            "X'abcd'"
        );
        let point = json!({ "type": "Point", "coordinates": [1.5, 2] });
        assert_eq!(
            render(
                &DataType::Geometry(GeometryType::geometry(Some("POINT"), None)),
                point,
                &CallOptions::new()
            ),
            "ST_GeomFromText('POINT(1.5 2)')"
        );
        assert_eq!(
            render(&DataType::string(20), SqlValue::Null, &CallOptions::new()),
            "NULL"
        );
    }
}
