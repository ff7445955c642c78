//! Decoding of values read from SQLite.

use sqltype_core::{CallOptions, ParseError, SqlValue, TypeKey};

/// Decode a raw driver value of the logical type `key`.
///
/// Floating columns store NaN and the infinities as the text the encoder
/// wrote for them; those are turned back into numbers here.
pub fn parse(
    key: TypeKey,
    value: SqlValue,
    _options: &CallOptions<'_>,
) -> Result<SqlValue, ParseError> {
    match (key, value) {
        (TypeKey::Float | TypeKey::Real | TypeKey::Double, SqlValue::String(text)) => {
            Ok(match text.as_str() {
                "NaN" => SqlValue::Float(f64::NAN),
                "Infinity" => SqlValue::Float(f64::INFINITY),
                "-Infinity" => SqlValue::Float(f64::NEG_INFINITY),
                _ => SqlValue::String(text),
            })
        }
        (TypeKey::Json, SqlValue::String(text)) => serde_json::from_str(&text)
            .map(SqlValue::Json)
            .map_err(|e| ParseError::InvalidJson(e.to_string())),
        (_, value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(key: TypeKey, value: impl Into<SqlValue>) -> SqlValue {
        parse(key, value.into(), &CallOptions::new()).unwrap()
    }

    #[test]
    fn test_float_sentinels() {
        for key in [TypeKey::Float, TypeKey::Real, TypeKey::Double] {
            assert!(matches!(decode(key, "NaN"), SqlValue::Float(f) if f.is_nan()));
            assert_eq!(decode(key, "Infinity"), SqlValue::Float(f64::INFINITY));
            assert_eq!(decode(key, "-Infinity"), SqlValue::Float(f64::NEG_INFINITY));
            assert_eq!(decode(key, 1.5), SqlValue::Float(1.5));
        }
    }

    #[test]
    fn test_sentinels_only_for_floating_types() {
        assert_eq!(decode(TypeKey::String, "NaN"), SqlValue::from("NaN"));
        assert_eq!(decode(TypeKey::Float, "nan"), SqlValue::from("nan"));
    }

    #[test]
    fn test_json_text() {
        assert_eq!(
            decode(TypeKey::Json, "[1,2]"),
            SqlValue::Json(serde_json::json!([1, 2]))
        );
        assert!(parse(TypeKey::Json, SqlValue::from("nope"), &CallOptions::new()).is_err());
    }
}
