//! Per-dialect physical type tables.
//!
//! Each dialect builds its table once from declarative entries. A key with
//! no entry uses the base behavior; a key registered as
//! [`Support::Unsupported`] is rejected by the schema layer.

use crate::dialect::Dialect;
use crate::types::TypeKey;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A driver-level type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalCode {
    /// Numeric id (MySQL column type, PostgreSQL OID, TDS type id).
    Id(u32),
    /// Type name (SQLite declared type, extension types, Oracle names).
    Name(&'static str),
}

impl fmt::Display for PhysicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Registry entry for one logical type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Support {
    /// The dialect cannot store this type.
    Unsupported,
    /// Codes the driver may report for a column of this type.
    Codes(Vec<PhysicalCode>),
}

/// Immutable table from logical keys to physical codes, and back.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    dialect: Dialect,
    entries: BTreeMap<TypeKey, Support>,
    by_code: HashMap<PhysicalCode, Vec<TypeKey>>,
}

impl TypeRegistry {
    pub fn builder(dialect: Dialect) -> TypeRegistryBuilder {
        TypeRegistryBuilder {
            dialect,
            entries: BTreeMap::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Entry for `key`, if the dialect registered one.
    pub fn support(&self, key: TypeKey) -> Option<&Support> {
        self.entries.get(&key)
    }

    /// Whether the dialect explicitly marks `key` as unsupported.
    pub fn is_unsupported(&self, key: TypeKey) -> bool {
        matches!(self.entries.get(&key), Some(Support::Unsupported))
    }

    /// Codes registered for `key`.
    pub fn codes(&self, key: TypeKey) -> &[PhysicalCode] {
        match self.entries.get(&key) {
            Some(Support::Codes(codes)) => codes,
            _ => &[],
        }
    }

    /// Logical keys that may have produced `code`, in registration key order.
    pub fn lookup(&self, code: PhysicalCode) -> &[TypeKey] {
        self.by_code.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects declarative entries; the first entry for a key wins.
#[derive(Debug)]
pub struct TypeRegistryBuilder {
    dialect: Dialect,
    entries: BTreeMap<TypeKey, Support>,
}

impl TypeRegistryBuilder {
    /// Register the physical codes of `key`. A key that already has an entry
    /// keeps it.
    pub fn register(mut self, key: TypeKey, codes: impl IntoIterator<Item = PhysicalCode>) -> Self {
        self.insert(key, Support::Codes(codes.into_iter().collect()));
        self
    }

    /// Mark `key` as unsupported by this dialect.
    pub fn unsupported(mut self, key: TypeKey) -> Self {
        self.insert(key, Support::Unsupported);
        self
    }

    fn insert(&mut self, key: TypeKey, support: Support) {
        if self.entries.contains_key(&key) {
            tracing::debug!(
                "{} registry already has an entry for {}, keeping it",
                self.dialect,
                key
            );
            return;
        }
        self.entries.insert(key, support);
    }

    pub fn build(self) -> TypeRegistry {
        let mut by_code: HashMap<PhysicalCode, Vec<TypeKey>> = HashMap::new();
        for (key, support) in &self.entries {
            if let Support::Codes(codes) = support {
                for code in codes {
                    by_code.entry(*code).or_default().push(*key);
                }
            }
        }
        tracing::debug!(
            "built {} type registry with {} entries",
            self.dialect,
            self.entries.len()
        );
        TypeRegistry {
            dialect: self.dialect,
            entries: self.entries,
            by_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registration_wins() {
        let registry = TypeRegistry::builder(Dialect::MySql)
            .register(TypeKey::Integer, [PhysicalCode::Id(3)])
            .register(TypeKey::Integer, [PhysicalCode::Id(8)])
            .unsupported(TypeKey::Integer)
            .build();
        assert_eq!(registry.codes(TypeKey::Integer), &[PhysicalCode::Id(3)]);
        assert!(!registry.is_unsupported(TypeKey::Integer));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reverse_lookup_shares_codes() {
        let registry = TypeRegistry::builder(Dialect::MySql)
            .register(TypeKey::TinyInt, [PhysicalCode::Id(1)])
            .register(TypeKey::Boolean, [PhysicalCode::Id(1)])
            .unsupported(TypeKey::Uuid)
            .build();
        assert_eq!(
            registry.lookup(PhysicalCode::Id(1)),
            &[TypeKey::TinyInt, TypeKey::Boolean]
        );
        assert!(registry.lookup(PhysicalCode::Name("nope")).is_empty());
        assert!(registry.is_unsupported(TypeKey::Uuid));
        assert!(registry.support(TypeKey::Json).is_none());
    }
}
