//! Logical SQL column types shared by every dialect.
//!
//! This crate provides the dialect-agnostic half of the type engine:
//!
//! - [`DataType`] - Logical column type descriptors and their options
//! - [`SqlValue`] - Runtime values handed to the engine
//! - [`DialectTypes`] - Per-dialect behavior, defaulting to the base rules
//! - [`TypeRegistry`] - Per-dialect physical type code tables
//! - [`escape`] - Raw value to SQL literal encoding
//!
//! # Architecture
//!
//! ```text
//! sqltype-core (this crate)
//!    │
//!    ├─── mysql-types         (MySqlTypes)
//!    ├─── postgresql-types    (PostgresTypes)
//!    ├─── sqlite-types        (SqliteTypes)
//!    ├─── mssql-types         (MssqlTypes)
//!    └─── oracle-types        (OracleTypes)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sqltype_core::{BaseTypes, CallOptions, DataType, Dialect, DialectTypes, SqlValue};
//!
//! let types = BaseTypes::new(Dialect::Postgres);
//! let ty = DataType::decimal((10, 2));
//! assert_eq!(types.to_sql(&ty, &CallOptions::new()).unwrap(), "DECIMAL(10,2)");
//! assert_eq!(types.escape(&SqlValue::from("O'Brien"), None, false).unwrap(), "'O''Brien'");
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod escape;
pub mod geometry;
pub mod modifier;
pub mod quote;
pub mod registry;
pub mod sanitize;
pub mod sql;
pub mod stringify;
pub mod timezone;
pub mod types;
pub mod validate;
pub mod values;
pub mod warnings;

// Re-exports for convenience
pub use dialect::{BaseTypes, CallOptions, Dialect, DialectTypes, EscapeFn, Operation};
pub use error::{EncodeError, ParseError, TypeError, ValidationError};
pub use modifier::Modifier;
pub use registry::{PhysicalCode, Support, TypeRegistry, TypeRegistryBuilder};
pub use types::{
    ArrayType, BlobType, DataType, DateType, DecimalOptions, DecimalType, EnumType, GeometryType,
    NumericKind, NumericOptions, NumericType, RangeType, SizeClass, SizedOptions, SpatialKind,
    StringKind, StringOptions, StringType, TextType, TypeKey, UuidKind, VirtualType,
};
pub use values::{RangeValue, SqlValue};
pub use warnings::WarningLog;
