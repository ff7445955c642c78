//! Dialects and the per-dialect behavior interface.
//!
//! A [`DialectTypes`] implementation is the dialect's view of every logical
//! type: which physical codes it recognizes ([`TypeRegistry`]) and which
//! behaviors it overrides. Every method defaults to the dialect-agnostic base
//! behavior, so an implementation only matches on the variants it changes.

use crate::error::{EncodeError, ParseError, TypeError, ValidationError};
use crate::registry::{Support, TypeRegistry};
use crate::types::{DataType, TypeKey};
use crate::values::SqlValue;
use crate::warnings::WarningLog;
use crate::{escape, sql, stringify};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A target SQL engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
    Mssql,
    Oracle,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Dialect; 5] = [
        Self::MySql,
        Self::Postgres,
        Self::Sqlite,
        Self::Mssql,
        Self::Oracle,
    ];

    /// Lower-case dialect name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::Mssql => "mssql",
            Self::Oracle => "oracle",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            "mssql" => Ok(Self::Mssql),
            "oracle" => Ok(Self::Oracle),
            _ => Err(TypeError::InvalidDefinition(format!("unknown dialect: {s}"))),
        }
    }
}

impl Serialize for Dialect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The statement being built when a value is stringified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
    Where,
}

/// Callback used to embed nested values (array elements, enum labels).
pub type EscapeFn<'a> = &'a dyn Fn(&SqlValue) -> Result<String, EncodeError>;

/// Per-call options accepted by `validate`, `stringify`, `sanitize` and
/// `parse`.
#[derive(Clone, Copy, Default)]
pub struct CallOptions<'a> {
    /// Skip value normalization in `sanitize`.
    pub raw: bool,
    /// IANA zone name or `+HH:MM` offset used for temporal values.
    pub timezone: Option<&'a str>,
    /// Escape callback for nested values; the dialect encoder when absent.
    pub escape: Option<EscapeFn<'a>>,
    /// Statement kind, when known.
    pub operation: Option<Operation>,
    /// Let UUID columns accept arbitrary strings.
    pub accept_strings: bool,
}

impl<'a> CallOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timezone(mut self, timezone: &'a str) -> Self {
        self.timezone = Some(timezone);
        self
    }

    pub fn with_escape(mut self, escape: EscapeFn<'a>) -> Self {
        self.escape = Some(escape);
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    pub fn accept_strings(mut self) -> Self {
        self.accept_strings = true;
        self
    }
}

impl fmt::Debug for CallOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallOptions")
            .field("raw", &self.raw)
            .field("timezone", &self.timezone)
            .field("escape", &self.escape.map(|_| "<fn>"))
            .field("operation", &self.operation)
            .field("accept_strings", &self.accept_strings)
            .finish()
    }
}

/// A dialect's type behavior.
///
/// All methods have base implementations; dialects override by matching on
/// the variants they specialize and delegating the rest to [`sql::to_sql`],
/// [`stringify::stringify`] and the inherent `DataType` methods.
pub trait DialectTypes: Send + Sync {
    /// The dialect this implementation serves.
    fn dialect(&self) -> Dialect;

    /// Physical type codes recognized for each logical type.
    fn registry(&self) -> &TypeRegistry;

    /// Dedupe log for dialect warnings.
    fn warnings(&self) -> &WarningLog;

    /// Render the DDL fragment for `ty`.
    fn to_sql(&self, ty: &DataType, options: &CallOptions<'_>) -> Result<String, TypeError> {
        sql::to_sql(self, ty, options)
    }

    /// Check that `value` is acceptable for `ty`.
    fn validate(
        &self,
        ty: &DataType,
        value: &SqlValue,
        options: &CallOptions<'_>,
    ) -> Result<(), ValidationError> {
        ty.validate(value, options)
    }

    /// Turn `value` into a literal that can be embedded in SQL text as-is.
    fn stringify(
        &self,
        ty: &DataType,
        value: &SqlValue,
        options: &CallOptions<'_>,
    ) -> Result<String, EncodeError> {
        stringify::stringify(self, ty, value, options)
    }

    /// Normalize a freshly assigned value.
    fn sanitize(&self, ty: &DataType, value: SqlValue, options: &CallOptions<'_>) -> SqlValue {
        ty.sanitize(value, options)
    }

    /// Dirty-tracking equality.
    fn is_changed(&self, ty: &DataType, old: &SqlValue, new: &SqlValue) -> bool {
        ty.is_changed(old, new)
    }

    /// Decode a raw driver value for a column of logical type `key`.
    fn parse(
        &self,
        key: TypeKey,
        value: SqlValue,
        options: &CallOptions<'_>,
    ) -> Result<SqlValue, ParseError> {
        let _ = (key, options);
        Ok(value)
    }

    /// Registry entry for `key`; `None` means base behavior.
    fn support(&self, key: TypeKey) -> Option<&Support> {
        self.registry().support(key)
    }

    /// Fail if the registry marks `key` as unsupported.
    fn ensure_supported(&self, key: TypeKey) -> Result<(), TypeError> {
        match self.support(key) {
            Some(Support::Unsupported) => Err(TypeError::UnsupportedType {
                dialect: self.dialect().to_string(),
                key,
            }),
            _ => Ok(()),
        }
    }

    /// Encode a raw value as a SQL literal for this dialect.
    fn escape(
        &self,
        value: &SqlValue,
        timezone: Option<&str>,
        format: bool,
    ) -> Result<String, EncodeError> {
        escape::escape_with(self, value, timezone, format)
    }
}

/// Dialect-agnostic behavior, quoting strings the way `dialect` does.
///
/// Its registry is empty: every type is rendered by the base rules.
#[derive(Debug)]
pub struct BaseTypes {
    dialect: Dialect,
    registry: TypeRegistry,
    warnings: Arc<WarningLog>,
}

impl BaseTypes {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            registry: TypeRegistry::builder(dialect).build(),
            warnings: WarningLog::global(),
        }
    }
}

impl DialectTypes for BaseTypes {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    fn warnings(&self) -> &WarningLog {
        &self.warnings
    }
}
