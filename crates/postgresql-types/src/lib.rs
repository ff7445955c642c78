//! PostgreSQL dialect for sqltype-core types.
//!
//! # Modules
//!
//! - [`ddl`] - Column type rendering, including PostGIS and range types
//! - [`forward`] - Literal stringification (ranges, hstore, native arrays)
//! - [`reverse`] - Decoding of driver text back into values
//! - [`schema`] - Type OIDs and extension type names per logical type
//!
//! # Example
//!
//! ```rust
//! use postgresql_types::PostgresTypes;
//! use sqltype_core::{CallOptions, DataType, DialectTypes, RangeValue, SqlValue};
//!
//! let types = PostgresTypes::new();
//! assert_eq!(
//!     types.to_sql(&DataType::date(None), &CallOptions::new()).unwrap(),
//!     "TIMESTAMP WITH TIME ZONE"
//! );
//! let range = SqlValue::Range(RangeValue::new(1, 5));
//! assert_eq!(
//!     types.stringify(&DataType::range(), &range, &CallOptions::new()).unwrap(),
//!     "'[1,5)'"
//! );
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

pub use schema::postgres_registry;

/// PostgreSQL type behavior.
#[derive(Debug)]
pub struct PostgresTypes {
    registry: TypeRegistry,
    warnings: Arc<WarningLog>,
}

impl PostgresTypes {
    /// PostgreSQL types logging through the process-wide warning log.
    pub fn new() -> Self {
        Self::with_warnings(WarningLog::global())
    }

    pub fn with_warnings(warnings: Arc<WarningLog>) -> Self {
        Self {
            registry: postgres_registry(),
            warnings,
        }
    }
}

impl Default for PostgresTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectTypes for PostgresTypes {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
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
