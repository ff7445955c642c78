//! Oracle DDL generation.

use sqltype_core::sql;
use sqltype_core::{
    CallOptions, DataType, DecimalType, DialectTypes, NumericKind, NumericType, StringKind,
    TypeError,
};

const NUMBER_DOCS: &str =
    "https://docs.oracle.com/en/database/oracle/oracle-database/21/sqlrf/Data-Types.html#GUID-75209AF6-476D-4C44-A5DC-5FA70D701B78";

/// Render `ty` as an Oracle column type.
pub fn to_sql<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    options: &CallOptions<'_>,
) -> Result<String, TypeError> {
    let sql = match ty {
        DataType::String(s) if s.binary => format!("RAW({})", s.length),
        DataType::String(s) => match s.kind {
            StringKind::VarChar => format!("NVARCHAR2({})", s.length),
            StringKind::Char => format!("CHAR({})", s.length),
        },
        DataType::Text(_) => "CLOB".to_string(),
        DataType::Numeric(n) => numeric_sql(types, n),
        DataType::Decimal(d) => number_sql(d),
        DataType::Boolean => "CHAR(1)".to_string(),
        DataType::Date(_) => "TIMESTAMP WITH LOCAL TIME ZONE".to_string(),
        DataType::Uuid(_) => "VARCHAR2(36)".to_string(),
        DataType::Json => "BLOB".to_string(),
        DataType::Enum(_) => "VARCHAR2(512)".to_string(),
        DataType::Blob(_) => "BLOB".to_string(),
        _ => return sql::to_sql(types, ty, options),
    };
    Ok(sql)
}

/// Integers map onto `NUMBER` with enough digits for the MySQL-style width;
/// floating types onto the IEEE binary types.
fn numeric_sql<T: DialectTypes + ?Sized>(types: &T, n: &NumericType) -> String {
    let key = n.key();
    if n.unsigned || n.zerofill || (n.kind.is_integer() && n.length.is_some()) {
        types.warnings().warn(
            NUMBER_DOCS,
            &format!(
                "Oracle does not support '{key}' with LENGTH, UNSIGNED or ZEROFILL. Plain '{key}' will be used instead."
            ),
        );
    }
    match n.kind {
        NumericKind::TinyInt => "NUMBER(3)".to_string(),
        NumericKind::SmallInt => "NUMBER(5)".to_string(),
        NumericKind::MediumInt => "NUMBER(8)".to_string(),
        NumericKind::Integer => "INTEGER".to_string(),
        NumericKind::BigInt => "NUMBER(19)".to_string(),
        NumericKind::Float => "BINARY_FLOAT".to_string(),
        NumericKind::Real | NumericKind::Double => "BINARY_DOUBLE".to_string(),
        NumericKind::Number => match (n.length, n.decimals) {
            (Some(len), Some(decimals)) => format!("NUMBER({len},{decimals})"),
            (Some(len), None) => format!("NUMBER({len})"),
            _ => "NUMBER".to_string(),
        },
    }
}

/// `NUMBER`, `NUMBER(p)` or `NUMBER(p,s)`.
fn number_sql(d: &DecimalType) -> String {
    match (d.precision, d.scale) {
        (Some(precision), Some(scale)) => format!("NUMBER({precision},{scale})"),
        (Some(precision), None) => format!("NUMBER({precision})"),
        _ => "NUMBER".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OracleTypes;
    use sqltype_core::{NumericOptions, SizeClass, StringOptions, StringType, WarningLog};
    use std::sync::Arc;

    fn isolated() -> (OracleTypes, Arc<WarningLog>) {
        let log = Arc::new(WarningLog::new());
        (OracleTypes::with_warnings(log.clone()), log)
    }

    fn render(types: &OracleTypes, ty: &DataType) -> String {
        types.to_sql(ty, &CallOptions::new()).unwrap()
    }

    #[test]
    fn test_strings() {
        let (types, _) = isolated();
        assert_eq!(render(&types, &DataType::string(100)), "NVARCHAR2(100)");
        let raw = DataType::String(StringType::varchar(StringOptions::default()).binary());
        assert_eq!(render(&types, &raw), "RAW(255)");
        assert_eq!(render(&types, &DataType::char(2)), "CHAR(2)");
        assert_eq!(render(&types, &DataType::text(SizeClass::Long)), "CLOB");
    }

    #[test]
    fn test_numbers() {
        let (types, log) = isolated();
        assert_eq!(render(&types, &DataType::big_int(NumericOptions::default())), "NUMBER(19)");
        assert_eq!(render(&types, &DataType::integer(NumericOptions::default())), "INTEGER");
        assert_eq!(render(&types, &DataType::double(NumericOptions::default())), "BINARY_DOUBLE");
        assert_eq!(render(&types, &DataType::float(NumericOptions::default())), "BINARY_FLOAT");
        assert_eq!(render(&types, &DataType::decimal((10, 2))), "NUMBER(10,2)");
        assert_eq!(render(&types, &DataType::decimal(7)), "NUMBER(7)");
        assert!(log.is_empty());

        let ty = DataType::from(NumericType::integer(11).unsigned());
        assert_eq!(render(&types, &ty), "INTEGER");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_fixed_renderings() {
        let (types, _) = isolated();
        assert_eq!(render(&types, &DataType::date(None)), "TIMESTAMP WITH LOCAL TIME ZONE");
        assert_eq!(render(&types, &DataType::DateOnly), "DATE");
        assert_eq!(render(&types, &DataType::uuid()), "VARCHAR2(36)");
        assert_eq!(render(&types, &DataType::Json), "BLOB");
        assert_eq!(render(&types, &DataType::enumeration(["a", "b"])), "VARCHAR2(512)");
        assert_eq!(render(&types, &DataType::Boolean), "CHAR(1)");
    }
}
