//! MySQL DDL generation.
//!
//! Only the types whose MySQL rendering differs from the base rules are
//! handled here; everything else falls through to [`sql::to_sql`].

use sqltype_core::sql::{self, decimal_sql};
use sqltype_core::{CallOptions, DataType, DialectTypes, GeometryType, TypeError};

/// Geometry subtypes MySQL columns may be declared with.
pub const SUPPORTED_GEOMETRY_TYPES: [&str; 3] = ["POINT", "LINESTRING", "POLYGON"];

/// Render `ty` as a MySQL column type.
pub fn to_sql<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    options: &CallOptions<'_>,
) -> Result<String, TypeError> {
    match ty {
        // DATETIME carries the fractional second precision
        DataType::Date(d) => Ok(match d.length {
            Some(length) => format!("DATETIME({length})"),
            None => "DATETIME".to_string(),
        }),
        DataType::Decimal(d) => {
            let mut sql = decimal_sql(d);
            if d.unsigned {
                sql.push_str(" UNSIGNED");
            }
            if d.zerofill {
                sql.push_str(" ZEROFILL");
            }
            Ok(sql)
        }
        DataType::Uuid(_) => Ok("CHAR(36) BINARY".to_string()),
        DataType::Geometry(g) => geometry_sql(g),
        _ => sql::to_sql(types, ty, options),
    }
}

fn geometry_sql(g: &GeometryType) -> Result<String, TypeError> {
    let Some(subtype) = &g.subtype else {
        return Ok("GEOMETRY".to_string());
    };
    let upper = subtype.to_ascii_uppercase();
    if SUPPORTED_GEOMETRY_TYPES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(TypeError::UnsupportedGeometry {
            supported: SUPPORTED_GEOMETRY_TYPES.join(", "),
        })
    }
}
