//! Oracle literal stringification.

use sqltype_core::stringify::{self, blob_bytes, format_instant, to_date, to_instant};
use sqltype_core::{CallOptions, DataType, DialectTypes, EncodeError, SqlValue};

/// Format mask matching `%Y-%m-%d %H:%M:%S%.3f %:z`.
pub const TIMESTAMP_TZ_MASK: &str = "YYYY-MM-DD HH24:MI:SS.FFTZH:TZM";

/// Stringify `value` as an Oracle literal of `ty`.
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
        DataType::Date(_) => {
            let text = format_instant(
                &to_instant(ty, value)?,
                options.timezone,
                stringify::DATE_FORMAT,
            )?;
            Ok(format!("TO_TIMESTAMP_TZ('{text}','{TIMESTAMP_TZ_MASK}')"))
        }
        DataType::DateOnly => {
            let date = to_date(ty, value)?;
            Ok(format!("TO_DATE('{}','YYYY/MM/DD')", date.format("%Y/%m/%d")))
        }
        DataType::Blob(_) => Ok(format!("HEXTORAW('{}')", hex::encode(blob_bytes(value)?))),
        _ => stringify::stringify(types, ty, value, options),
    }
}
