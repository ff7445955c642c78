//! Microsoft SQL Server dialect for sqltype-core types.
//!
//! # Modules
//!
//! - [`ddl`] - Column type rendering (`NVARCHAR`, `BIT`, `DATETIMEOFFSET`)
//! - [`forward`] - Literal stringification (`0x` binary literals)
//! - [`reverse`] - Decoding of driver values
//! - [`schema`] - TDS type ids per logical type
//!
//! # Example
//!
//! ```rust
//! use mssql_types::MssqlTypes;
//! use sqltype_core::{CallOptions, DataType, DialectTypes, SqlValue};
//!
//! let types = MssqlTypes::new();
//! assert_eq!(types.to_sql(&DataType::Boolean, &CallOptions::new()).unwrap(), "BIT");
//! assert_eq!(types.escape(&SqlValue::from("héllo"), None, false).unwrap(), "N'héllo'");
//! ```

pub mod ddl;
pub mod forward;
pub mod reverse;
pub mod schema;

use sqltype_core::{
    CallOptions, DataType, Dialect, DialectTypes, EncodeError, ParseError, SqlValue, TypeError,
    TypeKey, TypeRegistry, WarningLog,
};
use std::sync::Arc;

pub use schema::mssql_registry;

/// SQL Server type behavior.
#[derive(Debug)]
pub struct MssqlTypes {
    registry: TypeRegistry,
    warnings: Arc<WarningLog>,
}

impl MssqlTypes {
    /// SQL Server types logging through the process-wide warning log.
    pub fn new() -> Self {
        Self::with_warnings(WarningLog::global())
    }

    pub fn with_warnings(warnings: Arc<WarningLog>) -> Self {
        Self {
            registry: mssql_registry(),
            warnings,
        }
    }
}

impl Default for MssqlTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectTypes for MssqlTypes {
    fn dialect(&self) -> Dialect {
        Dialect::Mssql
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
