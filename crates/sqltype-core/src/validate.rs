//! Base value validation.
//!
//! The numeric and boolean checks work on the text form of the value, so
//! `"12"` passes INTEGER validation just like `12`.

use crate::dialect::CallOptions;
use crate::error::ValidationError;
use crate::timezone::parse_timestamp;
use crate::types::{DataType, NumericKind, UuidKind};
use crate::values::SqlValue;
use serde_json::Value as JsonValue;
use std::net::IpAddr;
use uuid::Uuid;

impl DataType {
    /// Check that `value` is acceptable for this type. Types without a
    /// constraint accept everything.
    pub fn validate(
        &self,
        value: &SqlValue,
        options: &CallOptions<'_>,
    ) -> Result<(), ValidationError> {
        match self {
            DataType::String(s) => {
                let ok = matches!(value, SqlValue::String(_))
                    || value.is_number()
                    || (s.binary && matches!(value, SqlValue::Bytes(_)));
                ensure(ok, value, "string")
            }
            DataType::Text(_) | DataType::Citext | DataType::Tsvector => {
                ensure(matches!(value, SqlValue::String(_)), value, "string")
            }
            DataType::Numeric(n) => {
                let expected = match n.kind {
                    NumericKind::Float => "float".to_string(),
                    kind => kind.key().as_str().to_lowercase(),
                };
                let ok = if n.kind.is_integer() {
                    text_of(value).is_some_and(|t| is_int(&t))
                } else {
                    (n.kind.is_floating() && matches!(value, SqlValue::Float(_)))
                        || text_of(value).is_some_and(|t| is_float(&t))
                };
                ensure(ok, value, expected)
            }
            DataType::Decimal(_) => {
                ensure(text_of(value).is_some_and(|t| is_decimal(&t)), value, "decimal")
            }
            DataType::Boolean => {
                let ok = text_of(value)
                    .is_some_and(|t| matches!(t.as_str(), "true" | "false" | "1" | "0"));
                ensure(ok, value, "boolean")
            }
            DataType::Date(_) => {
                let ok = match value {
                    SqlValue::Timestamp(_) | SqlValue::Date(_) => true,
                    other => text_of(other).is_some_and(|t| parse_timestamp(&t).is_some()),
                };
                ensure(ok, value, "date")
            }
            DataType::Hstore => {
                let ok = matches!(value, SqlValue::Object(_) | SqlValue::Json(JsonValue::Object(_)));
                ensure(ok, value, "hstore")
            }
            DataType::Blob(_) => {
                let ok = matches!(value, SqlValue::String(_) | SqlValue::Bytes(_));
                ensure(ok, value, "blob")
            }
            DataType::Range(_) => validate_range(value),
            DataType::Uuid(kind) => validate_uuid(*kind, value, options),
            DataType::Enum(e) => {
                let ok = value
                    .as_str()
                    .is_some_and(|v| e.values.iter().any(|allowed| allowed == v));
                if ok {
                    Ok(())
                } else {
                    let choices = JsonValue::from(e.values.clone());
                    Err(ValidationError::new(value, format!("choice in {choices}")))
                }
            }
            DataType::Array(_) => ensure(matches!(value, SqlValue::Array(_)), value, "array"),
            DataType::Virtual(v) => match &v.return_type {
                Some(return_type) => return_type.validate(value, options),
                None => Ok(()),
            },
            DataType::Cidr => ensure(text_of(value).is_some_and(|t| is_cidr(&t)), value, "CIDR"),
            DataType::Inet => ensure(
                text_of(value).is_some_and(|t| t.parse::<IpAddr>().is_ok()),
                value,
                "INET",
            ),
            DataType::Macaddr => ensure(
                text_of(value).is_some_and(|t| is_mac(&t)),
                value,
                "MACADDR",
            ),
            DataType::Time
            | DataType::DateOnly
            | DataType::Now
            | DataType::Json
            | DataType::Jsonb
            | DataType::Geometry(_) => Ok(()),
        }
    }
}

fn ensure(ok: bool, value: &SqlValue, expected: impl AsRef<str>) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(value, expected))
    }
}

fn text_of(value: &SqlValue) -> Option<String> {
    value.coerce_text()
}

fn validate_range(value: &SqlValue) -> Result<(), ValidationError> {
    let len = match value {
        SqlValue::Range(range) => range.bounds.len(),
        SqlValue::Array(items) => items.len(),
        other => return Err(ValidationError::new(other, "range")),
    };
    if len != 2 {
        return Err(ValidationError::with_message(
            value,
            "A range must be an array with two elements",
        ));
    }
    Ok(())
}

fn validate_uuid(
    kind: UuidKind,
    value: &SqlValue,
    options: &CallOptions<'_>,
) -> Result<(), ValidationError> {
    let expected = match kind {
        UuidKind::V4 => "uuidv4",
        UuidKind::Any | UuidKind::V1 => "uuid",
    };
    let text = match value {
        SqlValue::String(s) => s.clone(),
        SqlValue::Uuid(u) => u.hyphenated().to_string(),
        other => return Err(ValidationError::new(other, expected)),
    };
    if options.accept_strings || is_uuid(&text, kind) {
        Ok(())
    } else {
        Err(ValidationError::new(value, expected))
    }
}

/// Hyphenated RFC 4122 text, of the requested version.
pub fn is_uuid(text: &str, kind: UuidKind) -> bool {
    if text.len() != 36 {
        return false;
    }
    let Ok(uuid) = Uuid::parse_str(text) else {
        return false;
    };
    match kind {
        UuidKind::Any => true,
        UuidKind::V1 => uuid.get_version_num() == 1,
        UuidKind::V4 => {
            uuid.get_version_num() == 4 && uuid.get_variant() == uuid::Variant::RFC4122
        }
    }
}

/// Optionally signed run of decimal digits without leading zeros.
pub fn is_int(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
}

/// Signed decimal number with optional fraction and exponent.
pub fn is_float(text: &str) -> bool {
    if matches!(text, "" | "." | "-" | "+") {
        return false;
    }
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let digits_ok = int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit());
    let exponent_ok = match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && exp.bytes().all(|b| b.is_ascii_digit())
        }
    };
    digits_ok && exponent_ok && !(int_part.is_empty() && frac_part.is_empty() && exponent.is_some())
}

/// Signed decimal number with an optional fraction; no exponent.
pub fn is_decimal(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let frac_ok = match frac_part {
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    };
    !body.is_empty() && int_part.bytes().all(|b| b.is_ascii_digit()) && frac_ok
}

fn is_cidr(text: &str) -> bool {
    let Some((addr, prefix)) = text.split_once('/') else {
        return false;
    };
    let Ok(addr) = addr.parse::<IpAddr>() else {
        return false;
    };
    let max = if addr.is_ipv4() { 32 } else { 128 };
    !prefix.is_empty()
        && prefix.bytes().all(|b| b.is_ascii_digit())
        && prefix.parse::<u32>().is_ok_and(|p| p <= max)
}

fn is_mac(text: &str) -> bool {
    let separator = if text.contains('-') { '-' } else { ':' };
    let parts: Vec<&str> = text.split(separator).collect();
    parts.len() == 6
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NumericOptions, SizedOptions, StringType};
    use crate::values::RangeValue;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn check(ty: &DataType, value: impl Into<SqlValue>) -> Result<(), ValidationError> {
        ty.validate(&value.into(), &CallOptions::new())
    }

    #[test]
    fn test_string_validation() {
        let ty = DataType::string(10);
        assert!(check(&ty, "hello").is_ok());
        assert!(check(&ty, 12345).is_ok());
        let err = check(&ty, vec![1u8, 2]).unwrap_err();
        assert_eq!(err.to_string(), r#"{"data":[1,2],"type":"Buffer"} is not a valid string"#);
        assert!(check(&DataType::String(StringType::varchar(10).binary()), vec![1u8]).is_ok());

        let err = check(&DataType::text(SizedOptions::default()), 12345).unwrap_err();
        assert_eq!(err.to_string(), "12345 is not a valid string");
    }

    #[test]
    fn test_numeric_validation() {
        let int = DataType::integer(NumericOptions::default());
        assert!(check(&int, 12).is_ok());
        assert!(check(&int, "-12").is_ok());
        assert_eq!(check(&int, "1.5").unwrap_err().to_string(), "\"1.5\" is not a valid integer");
        assert!(check(&int, "012").is_err());

        let big = DataType::big_int(NumericOptions::default());
        assert_eq!(check(&big, "x").unwrap_err().to_string(), "\"x\" is not a valid bigint");

        let float = DataType::float(NumericOptions::default());
        assert!(check(&float, 1.5).is_ok());
        assert!(check(&float, "1e10").is_ok());
        assert!(check(&float, f64::NAN).is_ok());
        assert_eq!(check(&float, "abc").unwrap_err().to_string(), "\"abc\" is not a valid float");

        let decimal = DataType::decimal((10, 2));
        assert!(check(&decimal, "12.50").is_ok());
        assert!(check(&decimal, ".5").is_ok());
        assert!(check(&decimal, "1e5").is_err());
        assert!(check(&decimal, "-").is_err());
    }

    #[test]
    fn test_boolean_and_date_validation() {
        assert!(check(&DataType::Boolean, true).is_ok());
        assert!(check(&DataType::Boolean, "0").is_ok());
        assert_eq!(
            check(&DataType::Boolean, "yes").unwrap_err().to_string(),
            "\"yes\" is not a valid boolean"
        );
        assert!(check(&DataType::date(None), "2020-01-01 10:00:00").is_ok());
        assert!(check(&DataType::date(None), "tomorrow").is_err());
    }

    #[test]
    fn test_uuid_validation() {
        let v4 = Uuid::new_v4();
        let v1 = Uuid::now_v1(&[1, 2, 3, 4, 5, 6]);
        assert!(check(&DataType::uuid(), v4.to_string()).is_ok());
        assert!(check(&DataType::Uuid(UuidKind::V4), v4).is_ok());
        assert!(check(&DataType::Uuid(UuidKind::V1), v1.to_string()).is_ok());
        assert_eq!(
            check(&DataType::Uuid(UuidKind::V4), v1.to_string())
                .unwrap_err()
                .to_string(),
            format!("\"{v1}\" is not a valid uuidv4")
        );
        assert!(check(&DataType::Uuid(UuidKind::V1), v4.to_string()).is_err());
        assert!(check(&DataType::uuid(), "not-a-uuid").is_err());
        assert!(check(&DataType::uuid(), v4.simple().to_string()).is_err());

        let lenient = CallOptions::new().accept_strings();
        assert!(DataType::uuid()
            .validate(&SqlValue::from("anything"), &lenient)
            .is_ok());
        assert!(DataType::uuid().validate(&SqlValue::Int(1), &lenient).is_err());
    }

    #[test]
    fn test_enum_validation_is_order_independent() {
        let ab = DataType::enumeration(["a", "b"]);
        let ba = DataType::enumeration(["b", "a"]);
        for ty in [&ab, &ba] {
            assert!(check(ty, "a").is_ok());
            assert!(check(ty, "b").is_ok());
        }
        assert_eq!(
            check(&ab, "c").unwrap_err().to_string(),
            r#""c" is not a valid choice in ["a","b"]"#
        );
    }

    #[test]
    fn test_structured_validation() {
        assert!(check(&DataType::range(), RangeValue::new(1, 5)).is_ok());
        assert!(check(&DataType::range(), vec![SqlValue::Int(1), SqlValue::Int(2)]).is_ok());
        assert_eq!(
            check(&DataType::range(), vec![SqlValue::Int(1)])
                .unwrap_err()
                .to_string(),
            "A range must be an array with two elements"
        );
        assert_eq!(
            check(&DataType::range(), 5).unwrap_err().to_string(),
            "5 is not a valid range"
        );

        assert!(check(&DataType::Hstore, SqlValue::Object(BTreeMap::new())).is_ok());
        assert!(check(&DataType::Hstore, json!({"a": "b"})).is_ok());
        assert!(check(&DataType::Hstore, "a=>b").is_err());

        assert!(check(&DataType::Json, json!([1, 2])).is_ok());
        assert!(check(&DataType::blob(SizedOptions::default()), "raw").is_ok());
        assert!(check(&DataType::blob(SizedOptions::default()), 5).is_err());
        assert!(check(&DataType::array(DataType::Boolean), "x").is_err());
    }

    #[test]
    fn test_network_validation() {
        assert!(check(&DataType::Cidr, "10.0.0.0/8").is_ok());
        assert!(check(&DataType::Cidr, "10.0.0.0/33").is_err());
        assert!(check(&DataType::Inet, "::1").is_ok());
        assert!(check(&DataType::Macaddr, "08:00:2b:01:02:03").is_ok());
        assert!(check(&DataType::Macaddr, "08:00:2b").is_err());
    }
}
