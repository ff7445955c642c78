//! SQLite declared type names per logical type.
//!
//! SQLite reports the type name a column was declared with, so the codes
//! are the names the `ddl` module renders.

use sqltype_core::{Dialect, PhysicalCode, TypeKey, TypeRegistry};

fn names<const N: usize>(names: [&'static str; N]) -> [PhysicalCode; N] {
    names.map(PhysicalCode::Name)
}

/// Build the SQLite registry.
pub fn sqlite_registry() -> TypeRegistry {
    TypeRegistry::builder(Dialect::Sqlite)
        .register(TypeKey::String, names(["VARCHAR", "VARCHAR BINARY"]))
        .register(TypeKey::Char, names(["CHAR", "CHAR BINARY"]))
        .register(TypeKey::Text, names(["TEXT"]))
        .register(TypeKey::Citext, names(["TEXT COLLATE NOCASE"]))
        .register(TypeKey::Number, names(["NUMBER"]))
        .register(TypeKey::TinyInt, names(["TINYINT"]))
        .register(TypeKey::SmallInt, names(["SMALLINT"]))
        .register(TypeKey::MediumInt, names(["MEDIUMINT"]))
        .register(TypeKey::Integer, names(["INTEGER"]))
        .register(TypeKey::BigInt, names(["BIGINT"]))
        .register(TypeKey::Float, names(["FLOAT"]))
        .register(TypeKey::Real, names(["REAL"]))
        .register(TypeKey::Double, names(["DOUBLE PRECISION"]))
        .register(TypeKey::Decimal, names(["DECIMAL"]))
        .register(TypeKey::Boolean, names(["TINYINT(1)"]))
        .register(TypeKey::Time, names(["TIME"]))
        .register(TypeKey::Date, names(["DATETIME"]))
        .register(TypeKey::DateOnly, names(["DATE"]))
        .register(TypeKey::Json, names(["JSON"]))
        .register(TypeKey::Blob, names(["TINYBLOB", "BLOB", "MEDIUMBLOB", "LONGBLOB"]))
        .register(TypeKey::Uuid, names(["UUID"]))
        .unsupported(TypeKey::Range)
        .unsupported(TypeKey::Hstore)
        .unsupported(TypeKey::Jsonb)
        .unsupported(TypeKey::Array)
        .unsupported(TypeKey::Geometry)
        .unsupported(TypeKey::Geography)
        .unsupported(TypeKey::Tsvector)
        .unsupported(TypeKey::Cidr)
        .unsupported(TypeKey::Inet)
        .unsupported(TypeKey::Macaddr)
        .build()
}
