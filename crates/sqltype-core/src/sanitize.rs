//! Assignment-time normalization and dirty tracking.

use crate::dialect::CallOptions;
use crate::stringify::{to_date, to_instant, DATEONLY_FORMAT};
use crate::types::DataType;
use crate::values::SqlValue;

impl DataType {
    /// Normalize a freshly assigned value. Only BOOLEAN, DATE and DATEONLY
    /// change anything; `raw` disables the temporal conversions.
    pub fn sanitize(&self, value: SqlValue, options: &CallOptions<'_>) -> SqlValue {
        match self {
            DataType::Boolean => sanitize_boolean(value),
            DataType::Date(_) => {
                if options.raw || !value.is_truthy() || matches!(value, SqlValue::Timestamp(_)) {
                    return value;
                }
                match to_instant(self, &value) {
                    Ok(instant) => SqlValue::Timestamp(instant),
                    Err(_) => value,
                }
            }
            DataType::DateOnly => {
                if options.raw || !value.is_truthy() {
                    return value;
                }
                match to_date(self, &value) {
                    Ok(date) => SqlValue::String(date.format(DATEONLY_FORMAT).to_string()),
                    Err(_) => value,
                }
            }
            _ => value,
        }
    }

    /// Whether replacing `old` with `new` counts as a change. Temporal types
    /// treat two equal empty values, and two equal instants, as unchanged.
    pub fn is_changed(&self, old: &SqlValue, new: &SqlValue) -> bool {
        match self {
            DataType::Date(_) => {
                if old.is_truthy() && new.is_truthy() {
                    let same_instant = match (old, new) {
                        (SqlValue::Timestamp(a), SqlValue::Timestamp(b)) => a == b,
                        _ => false,
                    };
                    if old == new || same_instant {
                        return false;
                    }
                }
                !(!old.is_truthy() && !new.is_truthy() && old == new)
            }
            DataType::DateOnly => {
                if old.is_truthy() && new.is_truthy() && old == new {
                    return false;
                }
                !(!old.is_truthy() && !new.is_truthy() && old == new)
            }
            _ => old != new,
        }
    }
}

fn sanitize_boolean(value: SqlValue) -> SqlValue {
    let value = match value {
        SqlValue::Bytes(bytes) if bytes.len() == 1 => SqlValue::Int(i64::from(bytes[0])),
        other => other,
    };
    match value {
        SqlValue::String(s) if s == "true" => SqlValue::Bool(true),
        SqlValue::String(s) if s == "false" => SqlValue::Bool(false),
        SqlValue::Int(1) => SqlValue::Bool(true),
        SqlValue::Int(0) => SqlValue::Bool(false),
        SqlValue::Float(f) if f == 1.0 => SqlValue::Bool(true),
        SqlValue::Float(f) if f == 0.0 => SqlValue::Bool(false),
        other => other,
    }
}
