//! Error types for the type engine.
//!
//! Validation failures describe bad data and are expected to be collected by
//! the caller. Everything else here describes a caller defect: a value the
//! encoder cannot embed, a modifier used on the wrong family, a type a dialect
//! cannot render. Those must not be retried or swallowed.

use crate::types::TypeKey;
use crate::values::SqlValue;
use thiserror::Error;

/// A value was rejected by a type's `validate`.
///
/// `value` is the JSON-like rendering of the rejected value, never the raw
/// value, so the message is safe to log or show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// JSON rendering of the offending value.
    pub value: String,
    /// Full message, usually `<value> is not a valid <constraint>`.
    pub message: String,
}

impl ValidationError {
    /// Build an error for `value` failing the `expected` constraint
    /// (`string`, `choice in ["a"]`, ...).
    pub fn new(value: &SqlValue, expected: impl AsRef<str>) -> Self {
        let value = value.to_json_string();
        Self {
            message: format!("{value} is not a valid {}", expected.as_ref()),
            value,
        }
    }

    /// Build an error with a message that does not follow the usual shape.
    pub fn with_message(value: &SqlValue, message: impl Into<String>) -> Self {
        Self {
            value: value.to_json_string(),
            message: message.into(),
        }
    }
}

/// The encoder was asked to do something only a buggy caller would ask for.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// The value has no string form that could be safely quoted.
    #[error("Invalid value {0}")]
    NotCoercible(String),

    /// A `:name` placeholder has no entry in the supplied values.
    #[error("Named parameter \"{0}\" has no value in the given object.")]
    MissingNamedParameter(String),

    /// Neither an IANA zone name nor a `+HH:MM` offset.
    #[error("Invalid timezone: {0}. Use IANA names like 'Europe/London' or offsets like '+02:00'")]
    InvalidTimezone(String),

    /// The value cannot be stringified by the requested type.
    #[error("Cannot stringify {value} as {key}")]
    Unsupported { key: TypeKey, value: String },

    /// GeoJSON input could not be converted into a geometry.
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    /// A range literal must have zero or two bounds.
    #[error("range array length must be 0 (empty) or 2 (lower and upper bounds)")]
    RangeArity,

    /// A literal needed the SQL text of a type that cannot be rendered.
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// A descriptor was built or rendered in a way the type system forbids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Modifier applied outside its family whitelist.
    #[error("{modifier} is not applicable to {key}")]
    ModifierNotApplicable { modifier: String, key: TypeKey },

    /// A size class other than tiny, medium or long.
    #[error("Unknown size class: {0}")]
    UnknownSizeClass(String),

    /// Geometry subtype outside what the dialect accepts.
    #[error("Supported geometry types are: {supported}")]
    UnsupportedGeometry { supported: String },

    /// The dialect registry marks the key as unsupported.
    #[error("{dialect} does not support {key}")]
    UnsupportedType { dialect: String, key: TypeKey },

    /// Type configuration could not be read.
    #[error("Invalid type definition: {0}")]
    InvalidDefinition(String),
}

/// A raw driver value could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The raw value did not have the shape the decoder expects.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Date/time text was not in any recognized format.
    #[error("Invalid date/time value: {0}")]
    InvalidDateTime(String),

    /// Well-known-binary geometry was truncated or malformed.
    #[error("Invalid WKB geometry: {0}")]
    InvalidWkb(String),

    /// JSON text was malformed.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Timezone option was not usable.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

impl ParseError {
    pub fn mismatch(expected: &str, actual: &SqlValue) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_json_string(),
        }
    }
}

/// Result type for encoding.
pub type Result<T> = std::result::Result<T, EncodeError>;
