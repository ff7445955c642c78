//! SQLite dialect for sqltype-core types.
//!
//! SQLite accepts almost any declared type name, so rendering stays close to
//! the base rules. The differences are the position of `UNSIGNED`/`ZEROFILL`
//! in numeric types, TEXT without size classes, and ENUM as plain TEXT.
//!
//! # Modules
//!
//! - [`ddl`] - Declared type rendering
//! - [`reverse`] - Decoding of float sentinels and JSON text
//! - [`schema`] - Declared type names per logical type

pub mod ddl;
pub mod reverse;
pub mod schema;

use sqltype_core::{
    CallOptions, DataType, Dialect, DialectTypes, ParseError, SqlValue, TypeError, TypeKey,
    TypeRegistry, WarningLog,
};
use std::sync::Arc;

pub use schema::sqlite_registry;

/// SQLite type behavior.
#[derive(Debug)]
pub struct SqliteTypes {
    registry: TypeRegistry,
    warnings: Arc<WarningLog>,
}

impl SqliteTypes {
    /// SQLite types logging through the process-wide warning log.
    pub fn new() -> Self {
        Self::with_warnings(WarningLog::global())
    }

    pub fn with_warnings(warnings: Arc<WarningLog>) -> Self {
        Self {
            registry: sqlite_registry(),
            warnings,
        }
    }
}

impl Default for SqliteTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectTypes for SqliteTypes {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    fn warnings(&self) -> &WarningLog {
        &self.warnings
    }

    fn to_sql(&self, ty: &DataType, options: &CallOptions<'_>) -> Result<String, TypeError> {
        ddl::to_sql(self, ty, options)
    }

    fn parse(
        &self,
        key: TypeKey,
        value: SqlValue,
        options: &CallOptions<'_>,
    ) -> Result<SqlValue, ParseError> {
        reverse::parse(key, value, options)
    }
}
