//! Oracle type names per logical type.

use sqltype_core::{Dialect, PhysicalCode, TypeKey, TypeRegistry};

fn names<const N: usize>(names: [&'static str; N]) -> [PhysicalCode; N] {
    names.map(PhysicalCode::Name)
}

/// Build the Oracle registry.
pub fn oracle_registry() -> TypeRegistry {
    TypeRegistry::builder(Dialect::Oracle)
        .register(TypeKey::String, names(["NVARCHAR2", "VARCHAR2", "RAW"]))
        .register(TypeKey::Char, names(["CHAR", "NCHAR"]))
        .register(TypeKey::Text, names(["CLOB", "NCLOB"]))
        .register(TypeKey::Number, names(["NUMBER"]))
        .register(TypeKey::TinyInt, names(["NUMBER"]))
        .register(TypeKey::SmallInt, names(["NUMBER"]))
        .register(TypeKey::MediumInt, names(["NUMBER"]))
        .register(TypeKey::Integer, names(["NUMBER"]))
        .register(TypeKey::BigInt, names(["NUMBER"]))
        .register(TypeKey::Decimal, names(["NUMBER"]))
        .register(TypeKey::Float, names(["BINARY_FLOAT"]))
        .register(TypeKey::Real, names(["BINARY_DOUBLE"]))
        .register(TypeKey::Double, names(["BINARY_DOUBLE"]))
        .register(TypeKey::Boolean, names(["CHAR"]))
        .register(
            TypeKey::Date,
            names(["TIMESTAMP WITH LOCAL TIME ZONE", "TIMESTAMP WITH TIME ZONE"]),
        )
        .register(TypeKey::DateOnly, names(["DATE"]))
        .register(TypeKey::Uuid, names(["VARCHAR2"]))
        .register(TypeKey::Json, names(["BLOB"]))
        .register(TypeKey::Blob, names(["BLOB", "RAW"]))
        .register(TypeKey::Enum, names(["VARCHAR2"]))
        .unsupported(TypeKey::Time)
        .unsupported(TypeKey::Range)
        .unsupported(TypeKey::Hstore)
        .unsupported(TypeKey::Jsonb)
        .unsupported(TypeKey::Array)
        .unsupported(TypeKey::Geometry)
        .unsupported(TypeKey::Geography)
        .unsupported(TypeKey::Citext)
        .unsupported(TypeKey::Tsvector)
        .unsupported(TypeKey::Cidr)
        .unsupported(TypeKey::Inet)
        .unsupported(TypeKey::Macaddr)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_is_shared() {
        let registry = oracle_registry();
        let number = registry.lookup(PhysicalCode::Name("NUMBER"));
        assert!(number.contains(&TypeKey::Integer));
        assert!(number.contains(&TypeKey::Decimal));
        assert_eq!(registry.codes(TypeKey::Float), &[PhysicalCode::Name("BINARY_FLOAT")]);
    }

    #[test]
    fn test_unsupported() {
        let registry = oracle_registry();
        assert!(registry.is_unsupported(TypeKey::Time));
        assert!(registry.is_unsupported(TypeKey::Hstore));
    }
}
