//! SQL Server literal stringification.

use sqltype_core::stringify::{self, blob_bytes};
use sqltype_core::{CallOptions, DataType, DialectTypes, EncodeError, SqlValue};

/// Stringify `value` as a SQL Server literal of `ty`. Strings carry the `N`
/// prefix through the dialect quoting; binary values become `0x` literals.
pub fn stringify<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    value: &SqlValue,
    options: &CallOptions<'_>,
) -> Result<String, EncodeError> {
    match (ty, value) {
        (_, SqlValue::Null) => Ok("NULL".to_string()),
        (DataType::Blob(_), _) => Ok(format!("0x{}", hex::encode(blob_bytes(value)?))),
        _ => stringify::stringify(types, ty, value, options),
    }
}

#[cfg(test)]
mod tests {
    use crate::MssqlTypes;
    use chrono::{TimeZone, Utc};
    use sqltype_core::{CallOptions, DataType, DialectTypes, SizedOptions, SqlValue};

    #[test]
    fn test_binary_literals() {
        let types = MssqlTypes::new();
        let ty = DataType::blob(SizedOptions::default());
        assert_eq!(
            types
                .stringify(&ty, &SqlValue::Bytes(vec![0xAB, 0xCD]), &CallOptions::new())
                .unwrap(),
            "0xabcd"
        );
        assert_eq!(
            types.escape(&SqlValue::Bytes(vec![0x01, 0x02]), None, false).unwrap(),
            "0x0102"
        );
    }

    #[test]
    fn test_unicode_prefix_and_dates() {
        let types = MssqlTypes::new();
        assert_eq!(
            types
                .stringify(&DataType::string(10), &SqlValue::from("it's"), &CallOptions::new())
                .unwrap(),
            "N'it''s'"
        );
        let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            types
                .stringify(&DataType::date(None), &SqlValue::Timestamp(ts), &CallOptions::new())
                .unwrap(),
            "N'2020-01-02 03:04:05.000 +00:00'"
        );
        assert_eq!(types.escape(&SqlValue::Bool(true), None, false).unwrap(), "1");
    }
}
