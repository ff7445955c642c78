//! Logical column types.
//!
//! `DataType` is the dialect-agnostic descriptor of a column type. Each
//! dialect crate decides how a descriptor is rendered, stringified and parsed
//! via [`crate::DialectTypes`]; this module only defines the descriptors and
//! their construction rules.
//!
//! # Construction
//!
//! Length-taking families accept either a scalar or an options struct:
//!
//! ```rust
//! use sqltype_core::types::{DataType, StringOptions, StringType};
//!
//! let a = DataType::from(StringType::varchar(100));
//! let b = DataType::from(StringType::varchar(StringOptions { length: Some(100), binary: false }));
//! assert_eq!(a, b);
//! ```
//!
//! Modifiers are builder methods that only exist on the families that accept
//! them, so `StringType::varchar(10).unsigned()` does not compile.

use crate::error::TypeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default length of STRING and CHAR columns.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// Canonical key of a logical type family.
///
/// Dialect specializations keep the key of the family they specialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeKey {
    String,
    Char,
    Text,
    Citext,
    Tsvector,
    Number,
    Integer,
    TinyInt,
    SmallInt,
    MediumInt,
    BigInt,
    Float,
    Real,
    Double,
    Decimal,
    Boolean,
    Time,
    Date,
    DateOnly,
    Now,
    Hstore,
    Json,
    Jsonb,
    Blob,
    Range,
    Uuid,
    UuidV1,
    UuidV4,
    Virtual,
    Enum,
    Array,
    Geometry,
    Geography,
    Cidr,
    Inet,
    Macaddr,
}

impl TypeKey {
    /// Every key, in declaration order.
    pub const ALL: [TypeKey; 36] = [
        Self::String,
        Self::Char,
        Self::Text,
        Self::Citext,
        Self::Tsvector,
        Self::Number,
        Self::Integer,
        Self::TinyInt,
        Self::SmallInt,
        Self::MediumInt,
        Self::BigInt,
        Self::Float,
        Self::Real,
        Self::Double,
        Self::Decimal,
        Self::Boolean,
        Self::Time,
        Self::Date,
        Self::DateOnly,
        Self::Now,
        Self::Hstore,
        Self::Json,
        Self::Jsonb,
        Self::Blob,
        Self::Range,
        Self::Uuid,
        Self::UuidV1,
        Self::UuidV4,
        Self::Virtual,
        Self::Enum,
        Self::Array,
        Self::Geometry,
        Self::Geography,
        Self::Cidr,
        Self::Inet,
        Self::Macaddr,
    ];

    /// The canonical key text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Char => "CHAR",
            Self::Text => "TEXT",
            Self::Citext => "CITEXT",
            Self::Tsvector => "TSVECTOR",
            Self::Number => "NUMBER",
            Self::Integer => "INTEGER",
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::MediumInt => "MEDIUMINT",
            Self::BigInt => "BIGINT",
            Self::Float => "FLOAT",
            Self::Real => "REAL",
            Self::Double => "DOUBLE PRECISION",
            Self::Decimal => "DECIMAL",
            Self::Boolean => "BOOLEAN",
            Self::Time => "TIME",
            Self::Date => "DATE",
            Self::DateOnly => "DATEONLY",
            Self::Now => "NOW",
            Self::Hstore => "HSTORE",
            Self::Json => "JSON",
            Self::Jsonb => "JSONB",
            Self::Blob => "BLOB",
            Self::Range => "RANGE",
            Self::Uuid => "UUID",
            Self::UuidV1 => "UUIDV1",
            Self::UuidV4 => "UUIDV4",
            Self::Virtual => "VIRTUAL",
            Self::Enum => "ENUM",
            Self::Array => "ARRAY",
            Self::Geometry => "GEOMETRY",
            Self::Geography => "GEOGRAPHY",
            Self::Cidr => "CIDR",
            Self::Inet => "INET",
            Self::Macaddr => "MACADDR",
        }
    }

    /// Whether the key belongs to the numeric family (NUMBER and its
    /// descendants, including DECIMAL).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Number
                | Self::Integer
                | Self::TinyInt
                | Self::SmallInt
                | Self::MediumInt
                | Self::BigInt
                | Self::Float
                | Self::Real
                | Self::Double
                | Self::Decimal
        )
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeKey {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let key = match upper.as_str() {
            "DOUBLE" => Self::Double,
            "VARCHAR" => Self::String,
            other => Self::ALL
                .into_iter()
                .find(|k| k.as_str() == other)
                .ok_or_else(|| TypeError::InvalidDefinition(format!("unknown type: {s}")))?,
        };
        Ok(key)
    }
}

/// Size class of TEXT and BLOB columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Tiny,
    Medium,
    Long,
}

impl SizeClass {
    /// Lower-case name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl FromStr for SizeClass {
    type Err = TypeError;

    /// Case-insensitive: `Tiny`, `TINY` and `tiny` are the same class.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiny" => Ok(Self::Tiny),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(TypeError::UnknownSizeClass(s.to_string())),
        }
    }
}

impl Serialize for SizeClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SizeClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// STRING / CHAR
// ---------------------------------------------------------------------------

/// Whether a string column is variable (`VARCHAR`) or fixed (`CHAR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    VarChar,
    Char,
}

/// Options accepted by the STRING and CHAR constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringOptions {
    pub length: Option<u32>,
    pub binary: bool,
}

impl From<u32> for StringOptions {
    fn from(length: u32) -> Self {
        Self {
            length: Some(length),
            binary: false,
        }
    }
}

/// STRING and CHAR descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringType {
    pub kind: StringKind,
    pub length: u32,
    pub binary: bool,
}

impl StringType {
    /// A `VARCHAR` column; length defaults to 255.
    pub fn varchar(options: impl Into<StringOptions>) -> Self {
        Self::with_kind(StringKind::VarChar, options.into())
    }

    /// A `CHAR` column; length defaults to 255.
    pub fn char(options: impl Into<StringOptions>) -> Self {
        Self::with_kind(StringKind::Char, options.into())
    }

    fn with_kind(kind: StringKind, options: StringOptions) -> Self {
        Self {
            kind,
            length: options.length.unwrap_or(DEFAULT_STRING_LENGTH),
            binary: options.binary,
        }
    }

    /// BINARY modifier.
    pub fn binary(mut self) -> Self {
        self.binary = true;
        self
    }

    pub fn key(&self) -> TypeKey {
        match self.kind {
            StringKind::VarChar => TypeKey::String,
            StringKind::Char => TypeKey::Char,
        }
    }
}

// ---------------------------------------------------------------------------
// TEXT / BLOB
// ---------------------------------------------------------------------------

/// Options accepted by TEXT and BLOB constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizedOptions {
    pub length: Option<SizeClass>,
}

impl From<SizeClass> for SizedOptions {
    fn from(length: SizeClass) -> Self {
        Self {
            length: Some(length),
        }
    }
}

impl From<Option<SizeClass>> for SizedOptions {
    fn from(length: Option<SizeClass>) -> Self {
        Self { length }
    }
}

/// TEXT descriptor. No size class means the base physical `TEXT` type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextType {
    pub length: Option<SizeClass>,
}

impl TextType {
    pub fn new(options: impl Into<SizedOptions>) -> Self {
        Self {
            length: options.into().length,
        }
    }
}

/// BLOB descriptor. No size class means the base physical `BLOB` type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlobType {
    pub length: Option<SizeClass>,
}

impl BlobType {
    pub fn new(options: impl Into<SizedOptions>) -> Self {
        Self {
            length: options.into().length,
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric family
// ---------------------------------------------------------------------------

/// Members of the NUMBER family other than DECIMAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Number,
    Integer,
    TinyInt,
    SmallInt,
    MediumInt,
    BigInt,
    Float,
    Real,
    Double,
}

impl NumericKind {
    pub fn key(&self) -> TypeKey {
        match self {
            Self::Number => TypeKey::Number,
            Self::Integer => TypeKey::Integer,
            Self::TinyInt => TypeKey::TinyInt,
            Self::SmallInt => TypeKey::SmallInt,
            Self::MediumInt => TypeKey::MediumInt,
            Self::BigInt => TypeKey::BigInt,
            Self::Float => TypeKey::Float,
            Self::Real => TypeKey::Real,
            Self::Double => TypeKey::Double,
        }
    }

    /// INTEGER and its sized variants.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::TinyInt | Self::SmallInt | Self::MediumInt | Self::BigInt
        )
    }

    /// FLOAT, REAL and DOUBLE.
    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Float | Self::Real | Self::Double)
    }
}

/// Options accepted by numeric constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericOptions {
    pub length: Option<u32>,
    pub decimals: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl From<u32> for NumericOptions {
    fn from(length: u32) -> Self {
        Self {
            length: Some(length),
            ..Default::default()
        }
    }
}

impl From<(u32, u32)> for NumericOptions {
    fn from((length, decimals): (u32, u32)) -> Self {
        Self {
            length: Some(length),
            decimals: Some(decimals),
            ..Default::default()
        }
    }
}

impl From<Option<u32>> for NumericOptions {
    fn from(length: Option<u32>) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }
}

/// NUMBER, INTEGER, TINYINT, SMALLINT, MEDIUMINT, BIGINT, FLOAT, REAL and
/// DOUBLE descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericType {
    pub kind: NumericKind,
    pub length: Option<u32>,
    pub decimals: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl NumericType {
    pub fn new(kind: NumericKind, options: impl Into<NumericOptions>) -> Self {
        let options = options.into();
        Self {
            kind,
            length: options.length,
            decimals: options.decimals,
            unsigned: options.unsigned,
            zerofill: options.zerofill,
        }
    }

    pub fn number(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::Number, options)
    }

    pub fn integer(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::Integer, options)
    }

    pub fn tiny_int(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::TinyInt, options)
    }

    pub fn small_int(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::SmallInt, options)
    }

    pub fn medium_int(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::MediumInt, options)
    }

    pub fn big_int(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::BigInt, options)
    }

    pub fn float(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::Float, options)
    }

    pub fn real(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::Real, options)
    }

    pub fn double(options: impl Into<NumericOptions>) -> Self {
        Self::new(NumericKind::Double, options)
    }

    /// UNSIGNED modifier.
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    /// ZEROFILL modifier.
    pub fn zerofill(mut self) -> Self {
        self.zerofill = true;
        self
    }

    pub fn key(&self) -> TypeKey {
        self.kind.key()
    }
}

/// Options accepted by the DECIMAL constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalOptions {
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl From<u32> for DecimalOptions {
    fn from(precision: u32) -> Self {
        Self {
            precision: Some(precision),
            ..Default::default()
        }
    }
}

impl From<(u32, u32)> for DecimalOptions {
    fn from((precision, scale): (u32, u32)) -> Self {
        Self {
            precision: Some(precision),
            scale: Some(scale),
            ..Default::default()
        }
    }
}

/// DECIMAL descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecimalType {
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl DecimalType {
    pub fn new(options: impl Into<DecimalOptions>) -> Self {
        let options = options.into();
        Self {
            precision: options.precision,
            scale: options.scale,
            unsigned: options.unsigned,
            zerofill: options.zerofill,
        }
    }

    /// PRECISION modifier.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// SCALE modifier.
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// UNSIGNED modifier.
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    /// ZEROFILL modifier.
    pub fn zerofill(mut self) -> Self {
        self.zerofill = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Temporal, identity and structured families
// ---------------------------------------------------------------------------

/// DATE (date and time) descriptor. `length` is the fractional-second
/// precision, honored by dialects that support it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateType {
    pub length: Option<u32>,
}

impl DateType {
    pub fn new(length: Option<u32>) -> Self {
        Self { length }
    }
}

/// UUID flavours; the version constrains validation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidKind {
    Any,
    V1,
    V4,
}

/// ENUM descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub values: Vec<String>,
}

impl EnumType {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// ARRAY descriptor; owns its element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub element: Box<DataType>,
}

impl ArrayType {
    pub fn new(element: impl Into<DataType>) -> Self {
        Self {
            element: Box::new(element.into()),
        }
    }
}

/// RANGE descriptor; owns its subtype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeType {
    pub subtype: Box<DataType>,
}

impl Default for RangeType {
    fn default() -> Self {
        Self {
            subtype: Box::new(DataType::Numeric(NumericType::integer(
                NumericOptions::default(),
            ))),
        }
    }
}

impl RangeType {
    /// Range over `subtype`. Only subtypes with a native range type are
    /// accepted: INTEGER, BIGINT, DECIMAL, DATE and DATEONLY.
    pub fn new(subtype: impl Into<DataType>) -> Result<Self, TypeError> {
        let subtype = subtype.into();
        if range_name(subtype.key()).is_none() {
            return Err(TypeError::InvalidDefinition(format!(
                "RANGE does not support subtype {}",
                subtype.key()
            )));
        }
        Ok(Self {
            subtype: Box::new(subtype),
        })
    }

    /// Native range type name (`int4range`, `tstzrange`, ...).
    pub fn range_name(&self) -> &'static str {
        range_name(self.subtype.key()).unwrap_or("int4range")
    }
}

/// Native range type for a subtype key.
pub fn range_name(subtype: TypeKey) -> Option<&'static str> {
    match subtype {
        TypeKey::Integer => Some("int4range"),
        TypeKey::BigInt => Some("int8range"),
        TypeKey::Decimal => Some("numrange"),
        TypeKey::Date => Some("tstzrange"),
        TypeKey::DateOnly => Some("daterange"),
        _ => None,
    }
}

/// Whether a spatial column is planar or geodetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialKind {
    Geometry,
    Geography,
}

/// GEOMETRY and GEOGRAPHY descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryType {
    pub kind: SpatialKind,
    /// Geometry subtype such as `POINT`; `None` accepts any geometry.
    pub subtype: Option<String>,
    pub srid: Option<u32>,
}

impl GeometryType {
    pub fn geometry(subtype: Option<&str>, srid: Option<u32>) -> Self {
        Self {
            kind: SpatialKind::Geometry,
            subtype: subtype.map(str::to_string),
            srid,
        }
    }

    pub fn geography(subtype: Option<&str>, srid: Option<u32>) -> Self {
        Self {
            kind: SpatialKind::Geography,
            subtype: subtype.map(str::to_string),
            srid,
        }
    }

    pub fn key(&self) -> TypeKey {
        match self.kind {
            SpatialKind::Geometry => TypeKey::Geometry,
            SpatialKind::Geography => TypeKey::Geography,
        }
    }
}

/// VIRTUAL descriptor: no physical column, an optional type for the computed
/// value and the attributes it depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualType {
    pub return_type: Option<Box<DataType>>,
    pub fields: Vec<String>,
}

impl VirtualType {
    pub fn new(return_type: Option<DataType>, fields: Vec<String>) -> Self {
        Self {
            return_type: return_type.map(Box::new),
            fields,
        }
    }
}

// ---------------------------------------------------------------------------
// DataType
// ---------------------------------------------------------------------------

/// A logical column type with its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    String(StringType),
    Text(TextType),
    Citext,
    Tsvector,
    Numeric(NumericType),
    Decimal(DecimalType),
    Boolean,
    Time,
    Date(DateType),
    DateOnly,
    Now,
    Hstore,
    Json,
    Jsonb,
    Blob(BlobType),
    Range(RangeType),
    Uuid(UuidKind),
    Virtual(VirtualType),
    Enum(EnumType),
    Array(ArrayType),
    Geometry(GeometryType),
    Cidr,
    Inet,
    Macaddr,
}

impl DataType {
    /// Canonical key of this descriptor.
    pub fn key(&self) -> TypeKey {
        match self {
            Self::String(s) => s.key(),
            Self::Text(_) => TypeKey::Text,
            Self::Citext => TypeKey::Citext,
            Self::Tsvector => TypeKey::Tsvector,
            Self::Numeric(n) => n.key(),
            Self::Decimal(_) => TypeKey::Decimal,
            Self::Boolean => TypeKey::Boolean,
            Self::Time => TypeKey::Time,
            Self::Date(_) => TypeKey::Date,
            Self::DateOnly => TypeKey::DateOnly,
            Self::Now => TypeKey::Now,
            Self::Hstore => TypeKey::Hstore,
            Self::Json => TypeKey::Json,
            Self::Jsonb => TypeKey::Jsonb,
            Self::Blob(_) => TypeKey::Blob,
            Self::Range(_) => TypeKey::Range,
            Self::Uuid(UuidKind::Any) => TypeKey::Uuid,
            Self::Uuid(UuidKind::V1) => TypeKey::UuidV1,
            Self::Uuid(UuidKind::V4) => TypeKey::UuidV4,
            Self::Virtual(_) => TypeKey::Virtual,
            Self::Enum(_) => TypeKey::Enum,
            Self::Array(_) => TypeKey::Array,
            Self::Geometry(g) => g.key(),
            Self::Cidr => TypeKey::Cidr,
            Self::Inet => TypeKey::Inet,
            Self::Macaddr => TypeKey::Macaddr,
        }
    }

    /// `VARCHAR` column, length defaults to 255.
    pub fn string(options: impl Into<StringOptions>) -> Self {
        Self::String(StringType::varchar(options))
    }

    /// `CHAR` column, length defaults to 255.
    pub fn char(options: impl Into<StringOptions>) -> Self {
        Self::String(StringType::char(options))
    }

    pub fn text(options: impl Into<SizedOptions>) -> Self {
        Self::Text(TextType::new(options))
    }

    pub fn blob(options: impl Into<SizedOptions>) -> Self {
        Self::Blob(BlobType::new(options))
    }

    pub fn integer(options: impl Into<NumericOptions>) -> Self {
        Self::Numeric(NumericType::integer(options))
    }

    pub fn big_int(options: impl Into<NumericOptions>) -> Self {
        Self::Numeric(NumericType::big_int(options))
    }

    pub fn float(options: impl Into<NumericOptions>) -> Self {
        Self::Numeric(NumericType::float(options))
    }

    pub fn double(options: impl Into<NumericOptions>) -> Self {
        Self::Numeric(NumericType::double(options))
    }

    pub fn real(options: impl Into<NumericOptions>) -> Self {
        Self::Numeric(NumericType::real(options))
    }

    pub fn decimal(options: impl Into<DecimalOptions>) -> Self {
        Self::Decimal(DecimalType::new(options))
    }

    pub fn date(length: Option<u32>) -> Self {
        Self::Date(DateType::new(length))
    }

    pub fn uuid() -> Self {
        Self::Uuid(UuidKind::Any)
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(EnumType::new(values))
    }

    pub fn array(element: impl Into<DataType>) -> Self {
        Self::Array(ArrayType::new(element))
    }

    /// RANGE over INTEGER.
    pub fn range() -> Self {
        Self::Range(RangeType::default())
    }

    /// Whether the type has no physical column.
    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual(_))
    }

    /// Whether this descriptor is in the temporal family.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date(_) | Self::DateOnly | Self::Time | Self::Now)
    }
}

impl From<StringType> for DataType {
    fn from(t: StringType) -> Self {
        Self::String(t)
    }
}

impl From<TextType> for DataType {
    fn from(t: TextType) -> Self {
        Self::Text(t)
    }
}

impl From<BlobType> for DataType {
    fn from(t: BlobType) -> Self {
        Self::Blob(t)
    }
}

impl From<NumericType> for DataType {
    fn from(t: NumericType) -> Self {
        Self::Numeric(t)
    }
}

impl From<DecimalType> for DataType {
    fn from(t: DecimalType) -> Self {
        Self::Decimal(t)
    }
}

impl From<DateType> for DataType {
    fn from(t: DateType) -> Self {
        Self::Date(t)
    }
}

impl From<EnumType> for DataType {
    fn from(t: EnumType) -> Self {
        Self::Enum(t)
    }
}

impl From<ArrayType> for DataType {
    fn from(t: ArrayType) -> Self {
        Self::Array(t)
    }
}

impl From<RangeType> for DataType {
    fn from(t: RangeType) -> Self {
        Self::Range(t)
    }
}

impl From<GeometryType> for DataType {
    fn from(t: GeometryType) -> Self {
        Self::Geometry(t)
    }
}

impl From<VirtualType> for DataType {
    fn from(t: VirtualType) -> Self {
        Self::Virtual(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_and_options_constructors_agree() {
        assert_eq!(
            DataType::string(100),
            DataType::string(StringOptions {
                length: Some(100),
                binary: false
            })
        );
        assert_eq!(
            DataType::float((10, 2)),
            DataType::float(NumericOptions {
                length: Some(10),
                decimals: Some(2),
                ..Default::default()
            })
        );
        assert_eq!(DataType::decimal((10, 2)), DecimalType::new(10).scale(2).into());
    }

    #[test]
    fn test_construction_defaults() {
        let DataType::String(s) = DataType::string(StringOptions::default()) else {
            panic!("expected a string type");
        };
        assert_eq!(s.length, DEFAULT_STRING_LENGTH);
        assert_eq!(
            DataType::text(SizedOptions::default()),
            DataType::Text(TextType { length: None })
        );

        let DataType::Range(range) = DataType::range() else {
            panic!("expected a range type");
        };
        assert_eq!(range.subtype.key(), TypeKey::Integer);
    }

    #[test]
    fn test_size_class_is_case_insensitive() {
        assert_eq!("Tiny".parse::<SizeClass>().unwrap(), SizeClass::Tiny);
        assert_eq!("LONG".parse::<SizeClass>().unwrap(), SizeClass::Long);
        assert!("huge".parse::<SizeClass>().is_err());
    }

    #[test]
    fn test_keys() {
        assert_eq!(DataType::char(10).key(), TypeKey::Char);
        assert_eq!(
            DataType::double(NumericOptions::default()).key().as_str(),
            "DOUBLE PRECISION"
        );
        assert_eq!(DataType::Uuid(UuidKind::V4).key(), TypeKey::UuidV4);
        assert_eq!("double".parse::<TypeKey>().unwrap(), TypeKey::Double);
        assert_eq!("uuidv1".parse::<TypeKey>().unwrap(), TypeKey::UuidV1);
    }

    #[test]
    fn test_range_rejects_subtypes_without_native_range() {
        assert!(RangeType::new(DataType::string(10)).is_err());
        let range = RangeType::new(DataType::DateOnly).unwrap();
        assert_eq!(range.range_name(), "daterange");
    }
}
