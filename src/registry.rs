//! One instance of every dialect, looked up by [`Dialect`].

use mssql_types::MssqlTypes;
use mysql_types::MySqlTypes;
use oracle_types::OracleTypes;
use postgresql_types::PostgresTypes;
use sqlite_types::SqliteTypes;
use sqltype_core::{Dialect, DialectTypes, WarningLog};
use std::sync::{Arc, OnceLock};

/// The dialect implementations, sharing one warning log.
///
/// Building a registry is not free, so long-lived code should keep a
/// `TypeSystem` around (or use [`TypeSystem::global`]) instead of creating
/// dialects per call.
#[derive(Debug)]
pub struct TypeSystem {
    mysql: MySqlTypes,
    postgres: PostgresTypes,
    sqlite: SqliteTypes,
    mssql: MssqlTypes,
    oracle: OracleTypes,
    warnings: Arc<WarningLog>,
}

impl TypeSystem {
    /// Dialects logging through the process-wide warning log.
    pub fn new() -> Self {
        Self::with_warnings(WarningLog::global())
    }

    /// Dialects logging through `warnings`.
    pub fn with_warnings(warnings: Arc<WarningLog>) -> Self {
        tracing::debug!("Building type registries for every dialect");
        Self {
            mysql: MySqlTypes::with_warnings(warnings.clone()),
            postgres: PostgresTypes::with_warnings(warnings.clone()),
            sqlite: SqliteTypes::with_warnings(warnings.clone()),
            mssql: MssqlTypes::with_warnings(warnings.clone()),
            oracle: OracleTypes::with_warnings(warnings.clone()),
            warnings,
        }
    }

    /// The shared instance used by the free functions of this crate.
    pub fn global() -> &'static TypeSystem {
        static GLOBAL: OnceLock<TypeSystem> = OnceLock::new();
        GLOBAL.get_or_init(TypeSystem::new)
    }

    pub fn types_for(&self, dialect: Dialect) -> &dyn DialectTypes {
        match dialect {
            Dialect::MySql => &self.mysql,
            Dialect::Postgres => &self.postgres,
            Dialect::Sqlite => &self.sqlite,
            Dialect::Mssql => &self.mssql,
            Dialect::Oracle => &self.oracle,
        }
    }

    pub fn warnings(&self) -> &WarningLog {
        &self.warnings
    }
}

impl Default for TypeSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// The global implementation for `dialect`.
pub fn types_for(dialect: Dialect) -> &'static dyn DialectTypes {
    TypeSystem::global().types_for(dialect)
}
