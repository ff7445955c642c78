//! Serde support for type descriptors.
//!
//! A descriptor is written either as a bare type name (`integer`, `uuidv4`)
//! or as a map with a `type` entry and options:
//!
//! ```yaml
//! type: decimal
//! precision: 10
//! scale: 2
//! unsigned: true
//! ```
//!
//! Modifiers in a map (`unsigned`, `zerofill`, `binary`, `precision`,
//! `scale`) go through [`DataType::with_modifier`], so a modifier on a family
//! that does not define it is a deserialization error.

use crate::error::TypeError;
use crate::modifier::Modifier;
use crate::types::{
    ArrayType, BlobType, DataType, DateType, DecimalType, EnumType, GeometryType, NumericKind,
    NumericOptions, NumericType, RangeType, SizeClass, StringOptions, StringType,
    TextType, TypeKey, UuidKind, VirtualType, DEFAULT_STRING_LENGTH,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Configuration name of a key: the lower-cased key, `double` for DOUBLE
/// PRECISION.
fn config_name(key: TypeKey) -> String {
    match key {
        TypeKey::Double => "double".to_string(),
        other => other.as_str().to_lowercase(),
    }
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::{Error, SerializeMap};

        let entries = option_entries(self).map_err(S::Error::custom)?;
        let name = config_name(self.key());
        if entries.is_empty() {
            return serializer.serialize_str(&name);
        }
        let mut map = serializer.serialize_map(Some(entries.len() + 1))?;
        map.serialize_entry("type", &name)?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

type Entries = Vec<(&'static str, serde_yaml::Value)>;

fn option_entries(ty: &DataType) -> Result<Entries, serde_yaml::Error> {
    let mut entries: Entries = Vec::new();
    match ty {
        DataType::String(s) => {
            if s.length != DEFAULT_STRING_LENGTH {
                entries.push(("length", s.length.into()));
            }
            if s.binary {
                entries.push(("binary", true.into()));
            }
        }
        DataType::Text(TextType { length }) | DataType::Blob(BlobType { length }) => {
            if let Some(length) = length {
                entries.push(("length", length.as_str().into()));
            }
        }
        DataType::Numeric(n) => {
            if let Some(length) = n.length {
                entries.push(("length", length.into()));
            }
            if let Some(decimals) = n.decimals {
                entries.push(("decimals", decimals.into()));
            }
            push_flags(&mut entries, n.unsigned, n.zerofill);
        }
        DataType::Decimal(d) => {
            if let Some(precision) = d.precision {
                entries.push(("precision", precision.into()));
            }
            if let Some(scale) = d.scale {
                entries.push(("scale", scale.into()));
            }
            push_flags(&mut entries, d.unsigned, d.zerofill);
        }
        DataType::Date(DateType { length: Some(length) }) => {
            entries.push(("length", (*length).into()));
        }
        DataType::Enum(e) => entries.push(("values", serde_yaml::to_value(&e.values)?)),
        DataType::Array(a) => entries.push(("element", serde_yaml::to_value(&*a.element)?)),
        DataType::Range(r) => entries.push(("subtype", serde_yaml::to_value(&*r.subtype)?)),
        DataType::Geometry(g) => {
            if let Some(subtype) = &g.subtype {
                entries.push(("subtype", subtype.as_str().into()));
            }
            if let Some(srid) = g.srid {
                entries.push(("srid", srid.into()));
            }
        }
        DataType::Virtual(v) => {
            if let Some(return_type) = &v.return_type {
                entries.push(("return_type", serde_yaml::to_value(&**return_type)?));
            }
            if !v.fields.is_empty() {
                entries.push(("fields", serde_yaml::to_value(&v.fields)?));
            }
        }
        _ => {}
    }
    Ok(entries)
}

fn push_flags(entries: &mut Entries, unsigned: bool, zerofill: bool) {
    if unsigned {
        entries.push(("unsigned", true.into()));
    }
    if zerofill {
        entries.push(("zerofill", true.into()));
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct DataTypeVisitor;

        impl<'de> Visitor<'de> for DataTypeVisitor {
            type Value = DataType;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a type name or a map with a \"type\" entry")
            }

            // Bare name: "integer", "uuid", ...
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                build(value, &HashMap::new()).map_err(E::custom)
            }

            // Map: {"type": "decimal", "precision": 10}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;
                build(&type_name, &fields).map_err(M::Error::custom)
            }
        }

        deserializer.deserialize_any(DataTypeVisitor)
    }
}

type Fields = HashMap<String, serde_yaml::Value>;

fn build(type_name: &str, fields: &Fields) -> Result<DataType, TypeError> {
    let key: TypeKey = type_name.parse()?;
    let base = match key {
        TypeKey::String | TypeKey::Char => {
            let options = StringOptions {
                length: get_field(fields, "length")?,
                binary: false,
            };
            DataType::String(if key == TypeKey::Char {
                StringType::char(options)
            } else {
                StringType::varchar(options)
            })
        }
        TypeKey::Text => DataType::Text(TextType::new(size_class(fields)?)),
        TypeKey::Blob => DataType::Blob(BlobType::new(size_class(fields)?)),
        TypeKey::Citext => DataType::Citext,
        TypeKey::Tsvector => DataType::Tsvector,
        TypeKey::Number
        | TypeKey::Integer
        | TypeKey::TinyInt
        | TypeKey::SmallInt
        | TypeKey::MediumInt
        | TypeKey::BigInt
        | TypeKey::Float
        | TypeKey::Real
        | TypeKey::Double => {
            let options = NumericOptions {
                length: get_field(fields, "length")?,
                decimals: get_field(fields, "decimals")?,
                ..NumericOptions::default()
            };
            DataType::Numeric(NumericType::new(numeric_kind(key), options))
        }
        TypeKey::Decimal => DataType::Decimal(DecimalType::default()),
        TypeKey::Boolean => DataType::Boolean,
        TypeKey::Time => DataType::Time,
        TypeKey::Date => DataType::Date(DateType::new(get_field(fields, "length")?)),
        TypeKey::DateOnly => DataType::DateOnly,
        TypeKey::Now => DataType::Now,
        TypeKey::Hstore => DataType::Hstore,
        TypeKey::Json => DataType::Json,
        TypeKey::Jsonb => DataType::Jsonb,
        TypeKey::Range => match get_field::<DataType>(fields, "subtype")? {
            Some(subtype) => DataType::Range(RangeType::new(subtype)?),
            None => DataType::range(),
        },
        TypeKey::Uuid => DataType::Uuid(UuidKind::Any),
        TypeKey::UuidV1 => DataType::Uuid(UuidKind::V1),
        TypeKey::UuidV4 => DataType::Uuid(UuidKind::V4),
        TypeKey::Virtual => DataType::Virtual(VirtualType::new(
            get_field(fields, "return_type")?,
            get_field(fields, "fields")?.unwrap_or_default(),
        )),
        TypeKey::Enum => {
            let values: Vec<String> = get_field_required(fields, "values")?;
            DataType::Enum(EnumType::new(values))
        }
        TypeKey::Array => {
            let element: DataType = get_field_required(fields, "element")?;
            DataType::Array(ArrayType::new(element))
        }
        TypeKey::Geometry | TypeKey::Geography => {
            let subtype: Option<String> = get_field(fields, "subtype")?;
            let srid = get_field(fields, "srid")?;
            DataType::Geometry(if key == TypeKey::Geometry {
                GeometryType::geometry(subtype.as_deref(), srid)
            } else {
                GeometryType::geography(subtype.as_deref(), srid)
            })
        }
        TypeKey::Cidr => DataType::Cidr,
        TypeKey::Inet => DataType::Inet,
        TypeKey::Macaddr => DataType::Macaddr,
    };
    base.with_modifiers(modifiers(fields)?)
}

fn numeric_kind(key: TypeKey) -> NumericKind {
    match key {
        TypeKey::Integer => NumericKind::Integer,
        TypeKey::TinyInt => NumericKind::TinyInt,
        TypeKey::SmallInt => NumericKind::SmallInt,
        TypeKey::MediumInt => NumericKind::MediumInt,
        TypeKey::BigInt => NumericKind::BigInt,
        TypeKey::Float => NumericKind::Float,
        TypeKey::Real => NumericKind::Real,
        TypeKey::Double => NumericKind::Double,
        _ => NumericKind::Number,
    }
}

fn size_class(fields: &Fields) -> Result<Option<SizeClass>, TypeError> {
    get_field::<String>(fields, "length")?
        .map(|s| s.parse())
        .transpose()
}

fn modifiers(fields: &Fields) -> Result<Vec<Modifier>, TypeError> {
    let mut modifiers = Vec::new();
    if let Some(precision) = get_field(fields, "precision")? {
        modifiers.push(Modifier::Precision(precision));
    }
    if let Some(scale) = get_field(fields, "scale")? {
        modifiers.push(Modifier::Scale(scale));
    }
    for (name, modifier) in [
        ("unsigned", Modifier::Unsigned),
        ("zerofill", Modifier::Zerofill),
        ("binary", Modifier::Binary),
    ] {
        if get_field::<bool>(fields, name)?.unwrap_or(false) {
            modifiers.push(modifier);
        }
    }
    Ok(modifiers)
}

// Helper functions for deserialization
fn get_field<T: for<'de> Deserialize<'de>>(
    fields: &Fields,
    key: &str,
) -> Result<Option<T>, TypeError> {
    fields
        .get(key)
        .map(|v| {
            serde_yaml::from_value(v.clone())
                .map_err(|e| TypeError::InvalidDefinition(format!("invalid field '{key}': {e}")))
        })
        .transpose()
}

fn get_field_required<T: for<'de> Deserialize<'de>>(
    fields: &Fields,
    key: &str,
) -> Result<T, TypeError> {
    get_field(fields, key)?
        .ok_or_else(|| TypeError::InvalidDefinition(format!("missing field '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_simple_string() {
        let parsed: DataType = serde_yaml::from_str("integer").unwrap();
        assert_eq!(parsed, DataType::integer(NumericOptions::default()));

        let parsed: DataType = serde_yaml::from_str("uuidv4").unwrap();
        assert_eq!(parsed, DataType::Uuid(UuidKind::V4));

        let parsed: DataType = serde_yaml::from_str("double").unwrap();
        assert_eq!(parsed, DataType::double(NumericOptions::default()));
    }

    #[test]
    fn test_deserialize_with_modifiers() {
        let yaml = r#"
type: decimal
precision: 10
scale: 2
unsigned: true
"#;
        let parsed: DataType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, DecimalType::new((10, 2)).unsigned().into());

        let yaml = r#"
type: string
length: 32
binary: true
"#;
        let parsed: DataType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, StringType::varchar(32).binary().into());

        let yaml = r#"
type: text
length: Medium
"#;
        let parsed: DataType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, DataType::text(SizeClass::Medium));
    }

    #[test]
    fn test_modifier_outside_family_fails() {
        let yaml = r#"
type: string
unsigned: true
"#;
        let err = serde_yaml::from_str::<DataType>(yaml).unwrap_err();
        assert!(err.to_string().contains("UNSIGNED is not applicable to STRING"));

        let yaml = r#"
type: integer
precision: 4
"#;
        assert!(serde_yaml::from_str::<DataType>(yaml).is_err());
    }

    #[test]
    fn test_nested_types() {
        let yaml = r#"
type: array
element:
  type: enum
  values: [a, b]
"#;
        let parsed: DataType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, DataType::array(DataType::enumeration(["a", "b"])));

        let yaml = r#"
type: range
subtype: dateonly
"#;
        let parsed: DataType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, RangeType::new(DataType::DateOnly).unwrap().into());

        let yaml = r#"
type: range
subtype: string
"#;
        assert!(serde_yaml::from_str::<DataType>(yaml).is_err());
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let types = vec![
            DataType::Boolean,
            DataType::string(100),
            DataType::integer(11).with_modifier(Modifier::Zerofill).unwrap(),
            DataType::decimal((10, 2)),
            DataType::text(SizeClass::Long),
            DataType::date(Some(3)),
            DataType::array(DataType::uuid()),
            DataType::enumeration(["x", "y"]),
            DataType::Geometry(GeometryType::geometry(Some("POINT"), Some(4326))),
            DataType::double(NumericOptions::default()),
        ];

        for ty in types {
            let yaml = serde_yaml::to_string(&ty).unwrap();
            let parsed: DataType = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(ty, parsed);
        }
    }
}
