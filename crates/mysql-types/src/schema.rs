//! MySQL column type codes per logical type.
//!
//! The codes are the protocol column types reported in result set metadata,
//! so a decoder can map a column back to the logical type whose `parse`
//! should handle it.

use mysql_async::consts::ColumnType;
use sqltype_core::{Dialect, PhysicalCode, TypeKey, TypeRegistry};

fn code(column_type: ColumnType) -> PhysicalCode {
    PhysicalCode::Id(u32::from(column_type as u8))
}

fn codes<const N: usize>(column_types: [ColumnType; N]) -> [PhysicalCode; N] {
    column_types.map(code)
}

/// Build the MySQL registry.
pub fn mysql_registry() -> TypeRegistry {
    use ColumnType::*;

    TypeRegistry::builder(Dialect::MySql)
        .register(TypeKey::String, codes([MYSQL_TYPE_VAR_STRING]))
        .register(TypeKey::Char, codes([MYSQL_TYPE_STRING]))
        .register(TypeKey::Text, codes([MYSQL_TYPE_BLOB]))
        .register(TypeKey::TinyInt, codes([MYSQL_TYPE_TINY]))
        .register(TypeKey::SmallInt, codes([MYSQL_TYPE_SHORT]))
        .register(TypeKey::MediumInt, codes([MYSQL_TYPE_INT24]))
        .register(TypeKey::Integer, codes([MYSQL_TYPE_LONG]))
        .register(TypeKey::BigInt, codes([MYSQL_TYPE_LONGLONG]))
        .register(TypeKey::Float, codes([MYSQL_TYPE_FLOAT]))
        .register(TypeKey::Real, codes([MYSQL_TYPE_DOUBLE]))
        .register(TypeKey::Double, codes([MYSQL_TYPE_DOUBLE]))
        .register(TypeKey::Decimal, codes([MYSQL_TYPE_NEWDECIMAL]))
        .register(TypeKey::Boolean, codes([MYSQL_TYPE_TINY]))
        .register(TypeKey::Time, codes([MYSQL_TYPE_TIME]))
        .register(TypeKey::DateOnly, codes([MYSQL_TYPE_DATE]))
        .register(TypeKey::Date, codes([MYSQL_TYPE_DATETIME]))
        .register(
            TypeKey::Blob,
            codes([MYSQL_TYPE_TINY_BLOB, MYSQL_TYPE_BLOB, MYSQL_TYPE_LONG_BLOB]),
        )
        .register(TypeKey::Geometry, codes([MYSQL_TYPE_GEOMETRY]))
        .register(TypeKey::Json, codes([MYSQL_TYPE_JSON]))
        // CHAR(36) BINARY and ENUM columns are reported as fixed strings
        .register(TypeKey::Uuid, codes([MYSQL_TYPE_STRING]))
        .register(TypeKey::Enum, codes([MYSQL_TYPE_STRING]))
        .unsupported(TypeKey::Range)
        .unsupported(TypeKey::Hstore)
        .unsupported(TypeKey::Jsonb)
        .unsupported(TypeKey::Array)
        .unsupported(TypeKey::Citext)
        .unsupported(TypeKey::Tsvector)
        .unsupported(TypeKey::Geography)
        .unsupported(TypeKey::Cidr)
        .unsupported(TypeKey::Inet)
        .unsupported(TypeKey::Macaddr)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqltype_core::Support;

    #[test]
    fn test_codes_match_protocol_values() {
        let registry = mysql_registry();
        assert_eq!(registry.codes(TypeKey::Integer), &[PhysicalCode::Id(3)]);
        assert_eq!(registry.codes(TypeKey::BigInt), &[PhysicalCode::Id(8)]);
        assert_eq!(registry.codes(TypeKey::Decimal), &[PhysicalCode::Id(246)]);
        assert_eq!(
            registry.codes(TypeKey::Blob),
            &[PhysicalCode::Id(249), PhysicalCode::Id(252), PhysicalCode::Id(251)]
        );
        assert_eq!(registry.codes(TypeKey::Geometry), &[PhysicalCode::Id(255)]);
    }

    #[test]
    fn test_lookup_shared_codes() {
        let registry = mysql_registry();
        let tiny = registry.lookup(code(ColumnType::MYSQL_TYPE_TINY));
        assert!(tiny.contains(&TypeKey::TinyInt));
        assert!(tiny.contains(&TypeKey::Boolean));
        let double = registry.lookup(code(ColumnType::MYSQL_TYPE_DOUBLE));
        assert!(double.contains(&TypeKey::Real));
        assert!(double.contains(&TypeKey::Double));
        let fixed = registry.lookup(code(ColumnType::MYSQL_TYPE_STRING));
        assert_eq!(fixed, &[TypeKey::Char, TypeKey::Uuid, TypeKey::Enum]);
    }

    #[test]
    fn test_unsupported_types() {
        let registry = mysql_registry();
        assert_eq!(registry.support(TypeKey::Range), Some(&Support::Unsupported));
        assert!(registry.is_unsupported(TypeKey::Hstore));
        assert!(!registry.is_unsupported(TypeKey::Uuid));
        assert!(!registry.is_unsupported(TypeKey::Enum));
        assert!(!registry.is_unsupported(TypeKey::Json));
    }
}
