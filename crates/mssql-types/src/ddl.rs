//! SQL Server DDL generation.

use sqltype_core::sql::{self, decimal_sql};
use sqltype_core::{
    CallOptions, DataType, DialectTypes, NumericKind, NumericType, SizeClass, StringKind,
    TypeError,
};

const NUMERIC_DOCS: &str =
    "https://docs.microsoft.com/en-us/sql/t-sql/data-types/int-bigint-smallint-and-tinyint-transact-sql";
const FLOAT_DOCS: &str =
    "https://docs.microsoft.com/en-us/sql/t-sql/data-types/float-and-real-transact-sql";
const STRING_DOCS: &str =
    "https://docs.microsoft.com/en-us/sql/t-sql/data-types/nchar-and-nvarchar-transact-sql";
const BINARY_DOCS: &str =
    "https://docs.microsoft.com/en-us/sql/t-sql/data-types/binary-and-varbinary-transact-sql";

/// Render `ty` as a SQL Server column type.
pub fn to_sql<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    options: &CallOptions<'_>,
) -> Result<String, TypeError> {
    let sql = match ty {
        DataType::String(s) => match (s.kind, s.binary) {
            (StringKind::VarChar, false) => format!("NVARCHAR({})", s.length),
            (StringKind::VarChar, true) => format!("VARBINARY({})", s.length),
            (StringKind::Char, false) => format!("NCHAR({})", s.length),
            (StringKind::Char, true) => format!("BINARY({})", s.length),
        },
        DataType::Text(t) => match t.length {
            Some(SizeClass::Tiny) => {
                types.warnings().warn(
                    STRING_DOCS,
                    "MSSQL does not support TEXT with the `length` = `tiny` option. `NVARCHAR(256)` will be used instead.",
                );
                "NVARCHAR(256)".to_string()
            }
            _ => "NVARCHAR(MAX)".to_string(),
        },
        DataType::Numeric(n) if n.kind.is_integer() => integer_sql(types, n),
        DataType::Numeric(n) if n.kind.is_floating() => float_sql(types, n),
        DataType::Decimal(d) => decimal_sql(d),
        DataType::Boolean => "BIT".to_string(),
        DataType::Date(_) => "DATETIMEOFFSET".to_string(),
        DataType::Now => "GETDATE()".to_string(),
        DataType::Uuid(_) => "CHAR(36)".to_string(),
        DataType::Enum(_) => "VARCHAR(255)".to_string(),
        DataType::Json => "NVARCHAR(MAX)".to_string(),
        DataType::Blob(b) => match b.length {
            Some(SizeClass::Tiny) => {
                types.warnings().warn(
                    BINARY_DOCS,
                    "MSSQL does not support BLOB with the `length` = `tiny` option. `VARBINARY(256)` will be used instead.",
                );
                "VARBINARY(256)".to_string()
            }
            _ => "VARBINARY(MAX)".to_string(),
        },
        _ => return sql::to_sql(types, ty, options),
    };
    Ok(sql)
}

fn integer_sql<T: DialectTypes + ?Sized>(types: &T, n: &NumericType) -> String {
    let key = n.key();
    if n.length.is_some() || n.unsigned || n.zerofill {
        types.warnings().warn(
            NUMERIC_DOCS,
            &format!("MSSQL does not support '{key}' with options. Plain '{key}' will be used instead."),
        );
    }
    match n.kind {
        NumericKind::MediumInt => "INTEGER".to_string(),
        _ => key.as_str().to_string(),
    }
}

/// FLOAT keeps its precision length; everything else is dropped.
fn float_sql<T: DialectTypes + ?Sized>(types: &T, n: &NumericType) -> String {
    let key = n.key();
    let keeps_length = n.kind == NumericKind::Float && n.decimals.is_none();
    if n.unsigned || n.zerofill || n.decimals.is_some() || (n.length.is_some() && !keeps_length) {
        types.warnings().warn(
            FLOAT_DOCS,
            &format!("MSSQL does not support '{key}' with options. Plain '{key}' will be used instead."),
        );
    }
    match n.length.filter(|len| *len > 0) {
        Some(len) if keeps_length => format!("{key}({len})"),
        _ => key.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MssqlTypes;
    use sqltype_core::{
        NumericOptions, SizedOptions, StringOptions, StringType, WarningLog,
    };
    use std::sync::Arc;

    fn isolated() -> (MssqlTypes, Arc<WarningLog>) {
        let log = Arc::new(WarningLog::new());
        (MssqlTypes::with_warnings(log.clone()), log)
    }

    fn render(types: &MssqlTypes, ty: &DataType) -> String {
        types.to_sql(ty, &CallOptions::new()).unwrap()
    }

    #[test]
    fn test_strings() {
        let (types, _) = isolated();
        assert_eq!(render(&types, &DataType::string(StringOptions::default())), "NVARCHAR(255)");
        let binary = DataType::String(StringType::varchar(16).binary());
        assert_eq!(render(&types, &binary), "VARBINARY(16)");
        assert_eq!(render(&types, &DataType::char(10)), "NCHAR(10)");
        assert_eq!(render(&types, &DataType::text(SizedOptions::default())), "NVARCHAR(MAX)");
        assert_eq!(render(&types, &DataType::text(SizeClass::Tiny)), "NVARCHAR(256)");
    }

    #[test]
    fn test_integers_drop_options() {
        let (types, log) = isolated();
        let ty = DataType::from(NumericType::integer(11).unsigned());
        assert_eq!(render(&types, &ty), "INTEGER");
        assert!(log.has_warned(
            "MSSQL does not support 'INTEGER' with options. Plain 'INTEGER' will be used instead."
        ));
        assert_eq!(render(&types, &DataType::big_int(NumericOptions::default())), "BIGINT");
        assert_eq!(render(&types, &DataType::float(53)), "FLOAT(53)");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_fixed_renderings() {
        let (types, _) = isolated();
        assert_eq!(render(&types, &DataType::Boolean), "BIT");
        assert_eq!(render(&types, &DataType::date(Some(3))), "DATETIMEOFFSET");
        assert_eq!(render(&types, &DataType::DateOnly), "DATE");
        assert_eq!(render(&types, &DataType::Now), "GETDATE()");
        assert_eq!(render(&types, &DataType::uuid()), "CHAR(36)");
        assert_eq!(render(&types, &DataType::enumeration(["a"])), "VARCHAR(255)");
        assert_eq!(render(&types, &DataType::decimal((10, 2))), "DECIMAL(10,2)");
    }

    #[test]
    fn test_blobs() {
        let (types, log) = isolated();
        assert_eq!(render(&types, &DataType::blob(SizedOptions::default())), "VARBINARY(MAX)");
        assert_eq!(render(&types, &DataType::blob(SizeClass::Long)), "VARBINARY(MAX)");
        assert_eq!(render(&types, &DataType::blob(SizeClass::Tiny)), "VARBINARY(256)");
        assert_eq!(log.len(), 1);
    }
}
