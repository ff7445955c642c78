//! MySQL dialect for sqltype-core types.
//!
//! # Structure
//!
//! - `ddl`: Render column types as MySQL DDL
//! - `forward`: Stringify values as MySQL literals
//! - `reverse`: Decode values read by the MySQL driver
//! - `schema`: Physical column type codes per logical type
//!
//! # Example
//!
//! ```rust
//! use mysql_types::MySqlTypes;
//! use sqltype_core::{CallOptions, DataType, DecimalType, DialectTypes};
//!
//! let types = MySqlTypes::new();
//! let ty = DataType::from(DecimalType::new((10, 2)).unsigned());
//! assert_eq!(types.to_sql(&ty, &CallOptions::new()).unwrap(), "DECIMAL(10,2) UNSIGNED");
//! assert_eq!(types.to_sql(&DataType::uuid(), &CallOptions::new()).unwrap(), "CHAR(36) BINARY");
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

pub use ddl::SUPPORTED_GEOMETRY_TYPES;
pub use schema::mysql_registry;

/// MySQL (and MariaDB) type behavior.
#[derive(Debug)]
pub struct MySqlTypes {
    registry: TypeRegistry,
    warnings: Arc<WarningLog>,
}

impl MySqlTypes {
    /// MySQL types logging through the process-wide warning log.
    pub fn new() -> Self {
        Self::with_warnings(WarningLog::global())
    }

    pub fn with_warnings(warnings: Arc<WarningLog>) -> Self {
        Self {
            registry: mysql_registry(),
            warnings,
        }
    }
}

impl Default for MySqlTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectTypes for MySqlTypes {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
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
