//! Base DDL rendering.

use crate::dialect::{CallOptions, DialectTypes};
use crate::error::TypeError;
use crate::quote::quote_str;
use crate::types::{DataType, DecimalType, NumericType, SizeClass, StringKind, StringType};
use crate::values::SqlValue;

/// Where `UNSIGNED`/`ZEROFILL` go relative to the length parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierPlacement {
    /// `INTEGER(11) UNSIGNED`
    AfterLength,
    /// `INTEGER UNSIGNED(11)`
    BeforeLength,
}

/// Render `ty` with the dialect-agnostic rules. Nested types (array elements)
/// are rendered through `types`, so dialect overrides apply to them.
pub fn to_sql<T: DialectTypes + ?Sized>(
    types: &T,
    ty: &DataType,
    options: &CallOptions<'_>,
) -> Result<String, TypeError> {
    let sql = match ty {
        DataType::String(s) => string_sql(s),
        DataType::Text(t) => sized_sql("TEXT", t.length),
        DataType::Blob(b) => sized_sql("BLOB", b.length),
        DataType::Numeric(n) => numeric_sql(n, ModifierPlacement::AfterLength),
        DataType::Decimal(d) => decimal_sql(d),
        DataType::Boolean => "TINYINT(1)".to_string(),
        DataType::Date(_) => "DATETIME".to_string(),
        DataType::DateOnly => "DATE".to_string(),
        DataType::Range(r) => r.range_name().to_string(),
        DataType::Uuid(_) => "UUID".to_string(),
        DataType::Enum(e) => enum_sql(types, &e.values, options)?,
        DataType::Array(a) => format!("{}[]", types.to_sql(&a.element, options)?),
        other => other.key().as_str().to_string(),
    };
    Ok(sql)
}

/// `VARCHAR(n)[ BINARY]` or `CHAR(n)[ BINARY]`.
pub fn string_sql(s: &StringType) -> String {
    let name = match s.kind {
        StringKind::VarChar => "VARCHAR",
        StringKind::Char => "CHAR",
    };
    let mut sql = format!("{name}({})", s.length);
    if s.binary {
        sql.push_str(" BINARY");
    }
    sql
}

/// `TINY<base>`, `MEDIUM<base>`, `LONG<base>`, or `<base>` without a size
/// class.
pub fn sized_sql(base: &str, length: Option<SizeClass>) -> String {
    match length {
        Some(SizeClass::Tiny) => format!("TINY{base}"),
        Some(SizeClass::Medium) => format!("MEDIUM{base}"),
        Some(SizeClass::Long) => format!("LONG{base}"),
        None => base.to_string(),
    }
}

/// `KEY[(len[,decimals])][ UNSIGNED][ ZEROFILL]`, or with the modifiers in
/// front of the length for [`ModifierPlacement::BeforeLength`]. A zero
/// length is not rendered.
pub fn numeric_sql(n: &NumericType, placement: ModifierPlacement) -> String {
    let mut length = String::new();
    if let Some(len) = n.length.filter(|len| *len > 0) {
        length = match n.decimals {
            Some(decimals) => format!("({len},{decimals})"),
            None => format!("({len})"),
        };
    }
    let mut modifiers = String::new();
    if n.unsigned {
        modifiers.push_str(" UNSIGNED");
    }
    if n.zerofill {
        modifiers.push_str(" ZEROFILL");
    }
    let key = n.key();
    match placement {
        ModifierPlacement::AfterLength => format!("{key}{length}{modifiers}"),
        ModifierPlacement::BeforeLength => format!("{key}{modifiers}{length}"),
    }
}

/// `DECIMAL`, `DECIMAL(p)` or `DECIMAL(p,s)`. Unset and zero parts are
/// skipped.
pub fn decimal_sql(d: &DecimalType) -> String {
    let parts: Vec<String> = [d.precision, d.scale]
        .into_iter()
        .flatten()
        .filter(|part| *part != 0)
        .map(|part| part.to_string())
        .collect();
    if parts.is_empty() {
        "DECIMAL".to_string()
    } else {
        format!("DECIMAL({})", parts.join(","))
    }
}

/// `ENUM('a', 'b')`, labels escaped by the caller's escape callback or the
/// dialect's string quoting.
pub fn enum_sql<T: DialectTypes + ?Sized>(
    types: &T,
    values: &[String],
    options: &CallOptions<'_>,
) -> Result<String, TypeError> {
    let labels = values
        .iter()
        .map(|label| match options.escape {
            Some(escape) => escape(&SqlValue::String(label.clone()))
                .map_err(|e| TypeError::InvalidDefinition(e.to_string())),
            None => Ok(quote_str(types.dialect(), label)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("ENUM({})", labels.join(", ")))
}
