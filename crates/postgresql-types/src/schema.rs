//! PostgreSQL type OIDs per logical type.
//!
//! Built-in types use their fixed OIDs. Extension types (PostGIS, hstore,
//! citext) get a different OID in every database, so they are registered by
//! type name and resolved by the decoder at connection time.

use postgres_types::Type;
use sqltype_core::{Dialect, PhysicalCode, TypeKey, TypeRegistry};

fn oids<const N: usize>(types: [Type; N]) -> Vec<PhysicalCode> {
    types.iter().map(|t| PhysicalCode::Id(t.oid())).collect()
}

/// Build the PostgreSQL registry.
pub fn postgres_registry() -> TypeRegistry {
    TypeRegistry::builder(Dialect::Postgres)
        .register(TypeKey::String, oids([Type::VARCHAR]))
        .register(TypeKey::Char, oids([Type::BPCHAR]))
        .register(TypeKey::Text, oids([Type::TEXT]))
        .register(TypeKey::Citext, [PhysicalCode::Name("citext")])
        .register(TypeKey::Tsvector, oids([Type::TS_VECTOR]))
        .register(TypeKey::TinyInt, oids([Type::INT2]))
        .register(TypeKey::SmallInt, oids([Type::INT2]))
        .register(TypeKey::Integer, oids([Type::INT4]))
        .register(TypeKey::BigInt, oids([Type::INT8]))
        .register(TypeKey::Float, oids([Type::FLOAT4]))
        .register(TypeKey::Real, oids([Type::FLOAT4]))
        .register(TypeKey::Double, oids([Type::FLOAT8]))
        .register(TypeKey::Decimal, oids([Type::NUMERIC]))
        .register(TypeKey::Boolean, oids([Type::BOOL]))
        .register(TypeKey::Time, oids([Type::TIME]))
        .register(TypeKey::Date, oids([Type::TIMESTAMPTZ]))
        .register(TypeKey::DateOnly, oids([Type::DATE]))
        .register(TypeKey::Json, oids([Type::JSON]))
        .register(TypeKey::Jsonb, oids([Type::JSONB]))
        .register(TypeKey::Blob, oids([Type::BYTEA]))
        .register(TypeKey::Uuid, oids([Type::UUID]))
        .register(
            TypeKey::Range,
            oids([
                Type::INT4_RANGE,
                Type::INT8_RANGE,
                Type::NUM_RANGE,
                Type::TSTZ_RANGE,
                Type::DATE_RANGE,
            ]),
        )
        .register(
            TypeKey::Array,
            oids([
                Type::INT2_ARRAY,
                Type::INT4_ARRAY,
                Type::INT8_ARRAY,
                Type::TEXT_ARRAY,
                Type::VARCHAR_ARRAY,
                Type::NUMERIC_ARRAY,
                Type::BOOL_ARRAY,
                Type::UUID_ARRAY,
            ]),
        )
        .register(TypeKey::Hstore, [PhysicalCode::Name("hstore")])
        .register(TypeKey::Geometry, [PhysicalCode::Name("geometry")])
        .register(TypeKey::Geography, [PhysicalCode::Name("geography")])
        .register(TypeKey::Cidr, oids([Type::CIDR]))
        .register(TypeKey::Inet, oids([Type::INET]))
        .register(TypeKey::Macaddr, oids([Type::MACADDR]))
        .unsupported(TypeKey::MediumInt)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_oids() {
        let registry = postgres_registry();
        assert_eq!(registry.codes(TypeKey::Integer), &[PhysicalCode::Id(23)]);
        assert_eq!(registry.codes(TypeKey::Boolean), &[PhysicalCode::Id(16)]);
        assert_eq!(registry.codes(TypeKey::Date), &[PhysicalCode::Id(1184)]);
        assert_eq!(registry.codes(TypeKey::Range).len(), 5);
        assert_eq!(registry.lookup(PhysicalCode::Id(3904)), &[TypeKey::Range]);
    }

    #[test]
    fn test_extension_types_by_name() {
        let registry = postgres_registry();
        assert_eq!(
            registry.lookup(PhysicalCode::Name("geometry")),
            &[TypeKey::Geometry]
        );
        assert_eq!(registry.codes(TypeKey::Hstore), &[PhysicalCode::Name("hstore")]);
    }

    #[test]
    fn test_mediumint_is_unsupported() {
        let registry = postgres_registry();
        assert!(registry.is_unsupported(TypeKey::MediumInt));
        assert!(!registry.is_unsupported(TypeKey::Range));
    }
}
