//! SQLite declared type rendering.

use sqltype_core::sql::{self, numeric_sql, ModifierPlacement};
use sqltype_core::{CallOptions, DataType, DialectTypes, StringKind, TypeError};

const DATATYPES_DOCS: &str = "https://www.sqlite.org/datatype3.html";

/// Render `ty` as a SQLite declared type.
pub fn to_sql<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    options: &CallOptions<'_>,
) -> Result<String, TypeError> {
    let sql = match ty {
        DataType::String(s) if s.binary => match s.kind {
            StringKind::VarChar => format!("VARCHAR BINARY({})", s.length),
            StringKind::Char => format!("CHAR BINARY({})", s.length),
        },
        DataType::Text(t) => {
            if t.length.is_some() {
                types.warnings().warn(
                    DATATYPES_DOCS,
                    "SQLite does not support TEXT with options. Plain `TEXT` will be added instead.",
                );
            }
            "TEXT".to_string()
        }
        // Modifiers go before the length: INTEGER UNSIGNED(11)
        DataType::Numeric(n) => numeric_sql(n, ModifierPlacement::BeforeLength),
        DataType::Citext => "TEXT COLLATE NOCASE".to_string(),
        DataType::Enum(_) => "TEXT".to_string(),
        _ => return sql::to_sql(types, ty, options),
    };
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqliteTypes;
    use sqltype_core::{
        NumericOptions, NumericType, SizeClass, SizedOptions, StringOptions, StringType,
        WarningLog,
    };
    use std::sync::Arc;

    fn render(types: &SqliteTypes, ty: &DataType) -> String {
        types.to_sql(ty, &CallOptions::new()).unwrap()
    }

    #[test]
    fn test_modifiers_precede_length() {
        let types = SqliteTypes::new();
        let ty = DataType::from(NumericType::integer(11).unsigned());
        assert_eq!(render(&types, &ty), "INTEGER UNSIGNED(11)");
        let ty = DataType::from(NumericType::big_int(20).unsigned().zerofill());
        assert_eq!(render(&types, &ty), "BIGINT UNSIGNED ZEROFILL(20)");
        let ty = DataType::from(NumericType::float((10, 2)).unsigned());
        assert_eq!(render(&types, &ty), "FLOAT UNSIGNED(10,2)");
        assert_eq!(
            render(&types, &DataType::integer(NumericOptions::default())),
            "INTEGER"
        );
    }

    #[test]
    fn test_text_options_warn_once() {
        let log = Arc::new(WarningLog::new());
        let types = SqliteTypes::with_warnings(log.clone());
        assert_eq!(render(&types, &DataType::text(SizeClass::Tiny)), "TEXT");
        assert_eq!(render(&types, &DataType::text(SizeClass::Medium)), "TEXT");
        assert_eq!(render(&types, &DataType::text(SizedOptions::default())), "TEXT");
        assert_eq!(log.len(), 1);
        assert!(log.has_warned(
            "SQLite does not support TEXT with options. Plain `TEXT` will be added instead."
        ));
    }

    #[test]
    fn test_strings_and_enum() {
        let types = SqliteTypes::new();
        assert_eq!(render(&types, &DataType::string(50)), "VARCHAR(50)");
        let binary = DataType::String(StringType::varchar(40).binary());
        assert_eq!(render(&types, &binary), "VARCHAR BINARY(40)");
        let binary_char = DataType::String(StringType::char(StringOptions::default()).binary());
        assert_eq!(render(&types, &binary_char), "CHAR BINARY(255)");
        assert_eq!(render(&types, &DataType::Citext), "TEXT COLLATE NOCASE");
        assert_eq!(render(&types, &DataType::enumeration(["a", "b"])), "TEXT");
    }

    #[test]
    fn test_base_rendering_otherwise() {
        let types = SqliteTypes::new();
        assert_eq!(render(&types, &DataType::date(None)), "DATETIME");
        assert_eq!(render(&types, &DataType::Boolean), "TINYINT(1)");
        assert_eq!(render(&types, &DataType::decimal((10, 2))), "DECIMAL(10,2)");
        assert_eq!(render(&types, &DataType::blob(SizeClass::Tiny)), "TINYBLOB");
    }
}
