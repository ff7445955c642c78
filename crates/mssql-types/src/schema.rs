//! TDS type ids per logical type.
//!
//! The ids are the type bytes of the TDS `TYPE_INFO` structure that SQL
//! Server sends in column metadata.

use sqltype_core::{Dialect, PhysicalCode, TypeKey, TypeRegistry};

/// TDS type bytes.
pub mod tds {
    pub const IMAGE: u32 = 0x22;
    pub const TEXT: u32 = 0x23;
    pub const GUID: u32 = 0x24;
    pub const INTN: u32 = 0x26;
    pub const DATEN: u32 = 0x28;
    pub const TIMEN: u32 = 0x29;
    pub const DATETIME2N: u32 = 0x2A;
    pub const DATETIMEOFFSETN: u32 = 0x2B;
    pub const INT1: u32 = 0x30;
    pub const BIT: u32 = 0x32;
    pub const INT2: u32 = 0x34;
    pub const INT4: u32 = 0x38;
    pub const FLT4: u32 = 0x3B;
    pub const DATETIME: u32 = 0x3D;
    pub const FLT8: u32 = 0x3E;
    pub const NTEXT: u32 = 0x63;
    pub const BITN: u32 = 0x68;
    pub const DECIMALN: u32 = 0x6A;
    pub const NUMERICN: u32 = 0x6C;
    pub const FLTN: u32 = 0x6D;
    pub const INT8: u32 = 0x7F;
    pub const BIGVARBINARY: u32 = 0xA5;
    pub const BIGVARCHAR: u32 = 0xA7;
    pub const BIGBINARY: u32 = 0xAD;
    pub const BIGCHAR: u32 = 0xAF;
    pub const NVARCHAR: u32 = 0xE7;
    pub const NCHAR: u32 = 0xEF;
}

fn ids<const N: usize>(ids: [u32; N]) -> [PhysicalCode; N] {
    ids.map(PhysicalCode::Id)
}

/// Build the SQL Server registry.
pub fn mssql_registry() -> TypeRegistry {
    use tds::*;

    TypeRegistry::builder(Dialect::Mssql)
        .register(TypeKey::String, ids([NVARCHAR, BIGVARCHAR]))
        .register(TypeKey::Char, ids([NCHAR, BIGCHAR]))
        .register(TypeKey::Text, ids([NTEXT, TEXT]))
        .register(TypeKey::TinyInt, ids([INT1]))
        .register(TypeKey::SmallInt, ids([INT2]))
        .register(TypeKey::Integer, ids([INT4, INTN]))
        .register(TypeKey::BigInt, ids([INT8]))
        .register(TypeKey::Float, ids([FLT8, FLTN]))
        .register(TypeKey::Real, ids([FLT4]))
        .register(TypeKey::Double, ids([FLT8]))
        .register(TypeKey::Decimal, ids([DECIMALN, NUMERICN]))
        .register(TypeKey::Boolean, ids([BIT, BITN]))
        .register(TypeKey::Time, ids([TIMEN]))
        .register(TypeKey::Date, ids([DATETIMEOFFSETN, DATETIME2N, DATETIME]))
        .register(TypeKey::DateOnly, ids([DATEN]))
        .register(TypeKey::Uuid, ids([GUID]))
        .register(TypeKey::Blob, ids([BIGVARBINARY, BIGBINARY, IMAGE]))
        .register(TypeKey::Json, ids([NVARCHAR]))
        .unsupported(TypeKey::MediumInt)
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
