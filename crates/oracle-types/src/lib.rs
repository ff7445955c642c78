//! Oracle dialect for sqltype-core types.
//!
//! Temporal literals are emitted as `TO_TIMESTAMP_TZ`/`TO_DATE` calls, which
//! the Oracle string quoting recognizes and leaves unquoted.
//!
//! # Modules
//!
//! - [`ddl`] - Column type rendering (`NVARCHAR2`, `NUMBER`, `BINARY_DOUBLE`)
//! - [`forward`] - Literal stringification
//! - [`reverse`] - Decoding of driver values
//! - [`schema`] - Oracle type names per logical type

pub mod ddl;
pub mod forward;
pub mod reverse;
pub mod schema;

use sqltype_core::{
    CallOptions, DataType, Dialect, DialectTypes, EncodeError, ParseError, SqlValue, TypeError,
    TypeKey, TypeRegistry, WarningLog,
};
use std::sync::Arc;

pub use schema::oracle_registry;

/// Oracle type behavior.
#[derive(Debug)]
pub struct OracleTypes {
    registry: TypeRegistry,
    warnings: Arc<WarningLog>,
}

impl OracleTypes {
    /// Oracle types logging through the process-wide warning log.
    pub fn new() -> Self {
        Self::with_warnings(WarningLog::global())
    }

    pub fn with_warnings(warnings: Arc<WarningLog>) -> Self {
        Self {
            registry: oracle_registry(),
            warnings,
        }
    }
}

impl Default for OracleTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectTypes for OracleTypes {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
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

    fn stringify(
        &self,
        ty: &DataType,
        value: &SqlValue,
        options: &CallOptions<'_>,
    ) -> Result<String, EncodeError> {
        forward::stringify(self, ty, value, options)
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
