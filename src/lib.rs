//! sqltype
//!
//! Logical SQL column types rendered, validated and encoded for MySQL,
//! PostgreSQL, SQLite, SQL Server and Oracle.
//!
//! # Features
//!
//! - Type descriptors: one logical type, one DDL fragment per dialect
//! - Validation and normalization of values assigned to a column
//! - Literal encoding with per-dialect quoting rules
//! - Placeholder substitution for `?` and `:name` parameters
//! - Decoding of raw driver values back into logical values
//! - YAML table definitions rendered as `CREATE TABLE`
//!
//! # Dialect Crates
//!
//! Each dialect has its own crate implementing [`DialectTypes`]:
//!
//! - `mysql_types` - MySQL and MariaDB
//! - `postgresql_types` - PostgreSQL, including RANGE, HSTORE and PostGIS
//! - `sqlite_types` - SQLite
//! - `mssql_types` - SQL Server
//! - `oracle_types` - Oracle
//!
//! # Example
//!
//! ```rust
//! use sqltype::{escape, types_for, CallOptions, DataType, Dialect, NumericType, SqlValue};
//!
//! let ty = DataType::from(NumericType::integer(11).unsigned());
//! let sqlite = types_for(Dialect::Sqlite);
//! assert_eq!(sqlite.to_sql(&ty, &CallOptions::new()).unwrap(), "INTEGER UNSIGNED(11)");
//!
//! let value = SqlValue::from("O'Brien");
//! assert_eq!(escape(&value, None, Dialect::Postgres, false).unwrap(), "'O''Brien'");
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Column DDL for one type
//! sqltype ddl --dialect mysql '{type: decimal, precision: 10, scale: 2, unsigned: true}'
//!
//! # CREATE TABLE for every table in a schema file
//! sqltype tables --dialect postgres --schema-file schema.yaml
//!
//! # Literal encoding
//! sqltype escape --dialect mssql '"héllo"'
//! sqltype format --dialect mysql 'SELECT * FROM t WHERE x = :id' --values '{"id": 5}'
//! ```

pub mod encode;
pub mod registry;
pub mod schema;

pub use encode::{array_to_list, escape, format, format_named, value_from_json};
pub use registry::{types_for, TypeSystem};
pub use schema::{ColumnDefinition, Schema, SchemaError, TableDefinition};

pub use mssql_types::MssqlTypes;
pub use mysql_types::MySqlTypes;
pub use oracle_types::OracleTypes;
pub use postgresql_types::PostgresTypes;
pub use sqlite_types::SqliteTypes;

pub use sqltype_core::{
    ArrayType, BlobType, CallOptions, DataType, DateType, DecimalOptions, DecimalType, Dialect,
    DialectTypes, EncodeError, EnumType, GeometryType, Modifier, NumericKind, NumericOptions,
    NumericType, Operation, ParseError, PhysicalCode, RangeType, RangeValue, SizeClass,
    SizedOptions, SpatialKind, SqlValue, StringKind, StringOptions, StringType, Support,
    TextType, TypeError, TypeKey, TypeRegistry, UuidKind, ValidationError, VirtualType,
    WarningLog,
};
