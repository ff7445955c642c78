//! PostgreSQL DDL generation.
//!
//! PostgreSQL has no display widths, `UNSIGNED` or `ZEROFILL`, and no sized
//! TEXT/BLOB variants. Those options are dropped with a one-time warning
//! rather than rejected, so a model written for MySQL still renders.

use sqltype_core::sql::{self, decimal_sql};
use sqltype_core::{
    CallOptions, DataType, DialectTypes, GeometryType, NumericKind, NumericType, SpatialKind,
    StringKind, StringType, TypeError,
};

const INTEGER_DOCS: &str = "https://www.postgresql.org/docs/current/datatype-numeric.html#DATATYPE-INT";
const FLOAT_DOCS: &str = "https://www.postgresql.org/docs/current/datatype-numeric.html#DATATYPE-FLOAT";
const TEXT_DOCS: &str = "https://www.postgresql.org/docs/current/datatype-character.html";
const BYTEA_DOCS: &str = "https://www.postgresql.org/docs/current/datatype-binary.html";

/// Render `ty` as a PostgreSQL column type.
pub fn to_sql<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    options: &CallOptions<'_>,
) -> Result<String, TypeError> {
    let sql = match ty {
        DataType::String(s) => string_sql(s),
        DataType::Text(t) => {
            if t.length.is_some() {
                types.warnings().warn(
                    TEXT_DOCS,
                    "PostgreSQL does not support TEXT with options. Plain `TEXT` will be added instead.",
                );
            }
            "TEXT".to_string()
        }
        DataType::Numeric(n) if n.kind.is_integer() => integer_sql(types, n),
        DataType::Numeric(n) if n.kind.is_floating() => float_sql(types, n),
        DataType::Decimal(d) => decimal_sql(d),
        DataType::Boolean => "BOOLEAN".to_string(),
        DataType::Date(_) => "TIMESTAMP WITH TIME ZONE".to_string(),
        DataType::Blob(b) => {
            if b.length.is_some() {
                types.warnings().warn(
                    BYTEA_DOCS,
                    "PostgreSQL does not support BLOB (BYTEA) with options. Plain `BYTEA` will be added instead.",
                );
            }
            "BYTEA".to_string()
        }
        DataType::Geometry(g) => geometry_sql(g),
        _ => return sql::to_sql(types, ty, options),
    };
    Ok(sql)
}

/// Binary strings are byte arrays in PostgreSQL.
fn string_sql(s: &StringType) -> String {
    if s.binary {
        return "BYTEA".to_string();
    }
    match s.kind {
        StringKind::VarChar => format!("VARCHAR({})", s.length),
        StringKind::Char => format!("CHAR({})", s.length),
    }
}

fn integer_sql<T: DialectTypes + ?Sized>(types: &T, n: &NumericType) -> String {
    let name = match n.kind {
        NumericKind::TinyInt => "SMALLINT",
        NumericKind::MediumInt => "INTEGER",
        other => other.key().as_str(),
    };
    if n.length.is_some() || n.unsigned || n.zerofill {
        let key = n.key();
        types.warnings().warn(
            INTEGER_DOCS,
            &format!(
                "PostgresSQL does not support '{key}' with LENGTH, UNSIGNED or ZEROFILL. Plain '{key}' will be used instead."
            ),
        );
    }
    name.to_string()
}

/// FLOAT keeps a precision length; decimals and sign modifiers are dropped.
fn float_sql<T: DialectTypes + ?Sized>(types: &T, n: &NumericType) -> String {
    let key = n.key();
    let keeps_length = n.kind == NumericKind::Float && n.decimals.is_none();
    if n.unsigned || n.zerofill || n.decimals.is_some() || (n.length.is_some() && !keeps_length) {
        types.warnings().warn(
            FLOAT_DOCS,
            &format!(
                "PostgreSQL does not support '{key}' with LENGTH, DECIMALS, UNSIGNED or ZEROFILL. Plain '{key}' will be used instead."
            ),
        );
    }
    match n.length.filter(|len| *len > 0) {
        Some(len) if keeps_length => format!("{key}({len})"),
        _ => key.as_str().to_string(),
    }
}

/// `GEOMETRY`, `GEOMETRY(POINT)` or `GEOMETRY(POINT,4326)`; same for
/// GEOGRAPHY.
fn geometry_sql(g: &GeometryType) -> String {
    let base = match g.kind {
        SpatialKind::Geometry => "GEOMETRY",
        SpatialKind::Geography => "GEOGRAPHY",
    };
    match (&g.subtype, g.srid) {
        (None, _) => base.to_string(),
        (Some(subtype), None) => format!("{base}({})", subtype.to_ascii_uppercase()),
        (Some(subtype), Some(srid)) => {
            format!("{base}({},{srid})", subtype.to_ascii_uppercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PostgresTypes;
    use sqltype_core::{
        DecimalType, NumericOptions, RangeType, SizeClass, SizedOptions, StringOptions,
        WarningLog,
    };
    use std::sync::Arc;

    fn isolated() -> (PostgresTypes, Arc<WarningLog>) {
        let log = Arc::new(WarningLog::new());
        (PostgresTypes::with_warnings(log.clone()), log)
    }

    fn render(types: &PostgresTypes, ty: &DataType) -> String {
        types.to_sql(ty, &CallOptions::new()).unwrap()
    }

    #[test]
    fn test_integers_drop_mysql_options() {
        let (types, log) = isolated();
        let ty = DataType::from(NumericType::integer(11).unsigned());
        assert_eq!(render(&types, &ty), "INTEGER");
        assert!(log.has_warned(
            "PostgresSQL does not support 'INTEGER' with LENGTH, UNSIGNED or ZEROFILL. Plain 'INTEGER' will be used instead."
        ));
        assert_eq!(render(&types, &DataType::big_int(NumericOptions::default())), "BIGINT");
        let tiny = DataType::from(NumericType::tiny_int(NumericOptions::default()));
        assert_eq!(render(&types, &tiny), "SMALLINT");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_floats() {
        let (types, log) = isolated();
        assert_eq!(render(&types, &DataType::float(NumericOptions::default())), "FLOAT");
        assert_eq!(render(&types, &DataType::float(24)), "FLOAT(24)");
        assert!(log.is_empty());
        assert_eq!(render(&types, &DataType::float((10, 2))), "FLOAT");
        assert_eq!(render(&types, &DataType::double(NumericOptions::default())), "DOUBLE PRECISION");
        assert_eq!(render(&types, &DataType::real(8)), "REAL");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_strings_text_and_binary() {
        let (types, log) = isolated();
        assert_eq!(render(&types, &DataType::string(30)), "VARCHAR(30)");
        let binary = DataType::String(StringType::varchar(StringOptions::default()).binary());
        assert_eq!(render(&types, &binary), "BYTEA");
        assert_eq!(render(&types, &DataType::text(SizeClass::Tiny)), "TEXT");
        assert_eq!(render(&types, &DataType::text(SizeClass::Long)), "TEXT");
        assert_eq!(render(&types, &DataType::blob(SizedOptions::default())), "BYTEA");
        assert_eq!(log.len(), 1);
        assert_eq!(render(&types, &DataType::Citext), "CITEXT");
    }

    #[test]
    fn test_temporal_and_misc() {
        let (types, _) = isolated();
        assert_eq!(render(&types, &DataType::date(Some(6))), "TIMESTAMP WITH TIME ZONE");
        assert_eq!(render(&types, &DataType::DateOnly), "DATE");
        assert_eq!(render(&types, &DataType::Boolean), "BOOLEAN");
        assert_eq!(render(&types, &DataType::uuid()), "UUID");
        assert_eq!(render(&types, &DataType::Jsonb), "JSONB");
        assert_eq!(render(&types, &DataType::Hstore), "HSTORE");
        assert_eq!(
            render(&types, &DataType::from(DecimalType::new((10, 2)))),
            "DECIMAL(10,2)"
        );
    }

    #[test]
    fn test_ranges_and_arrays() {
        let (types, _) = isolated();
        assert_eq!(render(&types, &DataType::range()), "int4range");
        let dates = RangeType::new(DataType::date(None)).unwrap();
        assert_eq!(render(&types, &DataType::Range(dates)), "tstzrange");
        let array = DataType::array(DataType::integer(11));
        assert_eq!(render(&types, &array), "INTEGER[]");
        let nested = DataType::array(DataType::array(DataType::string(10)));
        assert_eq!(render(&types, &nested), "VARCHAR(10)[][]");
    }

    #[test]
    fn test_geometry() {
        let (types, _) = isolated();
        assert_eq!(
            render(&types, &DataType::Geometry(GeometryType::geometry(None, None))),
            "GEOMETRY"
        );
        assert_eq!(
            render(&types, &DataType::Geometry(GeometryType::geometry(Some("point"), None))),
            "GEOMETRY(POINT)"
        );
        assert_eq!(
            render(
                &types,
                &DataType::Geometry(GeometryType::geography(Some("POLYGON"), Some(4326)))
            ),
            "GEOGRAPHY(POLYGON,4326)"
        );
    }
}
