//! Run-time modifier application.
//!
//! Code that builds descriptors directly uses the builder methods
//! (`NumericType::unsigned`, `StringType::binary`, ...), which only exist on
//! the families that accept them. Descriptors built from configuration go
//! through [`DataType::with_modifier`] instead, which enforces the same
//! whitelist and fails on anything else.

use crate::error::TypeError;
use crate::types::DataType;
use std::fmt;

/// A post-construction modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// NUMBER family and DECIMAL.
    Unsigned,
    /// NUMBER family and DECIMAL.
    Zerofill,
    /// STRING and CHAR.
    Binary,
    /// DECIMAL only.
    Precision(u32),
    /// DECIMAL only.
    Scale(u32),
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned => f.write_str("UNSIGNED"),
            Self::Zerofill => f.write_str("ZEROFILL"),
            Self::Binary => f.write_str("BINARY"),
            Self::Precision(p) => write!(f, "PRECISION({p})"),
            Self::Scale(s) => write!(f, "SCALE({s})"),
        }
    }
}

impl DataType {
    /// Apply `modifier`, or fail if this family does not define it.
    pub fn with_modifier(self, modifier: Modifier) -> Result<DataType, TypeError> {
        let applied = match (self, modifier) {
            (DataType::Numeric(n), Modifier::Unsigned) => DataType::Numeric(n.unsigned()),
            (DataType::Numeric(n), Modifier::Zerofill) => DataType::Numeric(n.zerofill()),
            (DataType::Decimal(d), Modifier::Unsigned) => DataType::Decimal(d.unsigned()),
            (DataType::Decimal(d), Modifier::Zerofill) => DataType::Decimal(d.zerofill()),
            (DataType::Decimal(d), Modifier::Precision(p)) => DataType::Decimal(d.precision(p)),
            (DataType::Decimal(d), Modifier::Scale(s)) => DataType::Decimal(d.scale(s)),
            (DataType::String(s), Modifier::Binary) => DataType::String(s.binary()),
            (other, modifier) => {
                return Err(TypeError::ModifierNotApplicable {
                    modifier: modifier.to_string(),
                    key: other.key(),
                })
            }
        };
        Ok(applied)
    }

    /// Apply several modifiers in order, stopping at the first failure.
    pub fn with_modifiers(
        self,
        modifiers: impl IntoIterator<Item = Modifier>,
    ) -> Result<DataType, TypeError> {
        modifiers
            .into_iter()
            .try_fold(self, |ty, modifier| ty.with_modifier(modifier))
    }
}
