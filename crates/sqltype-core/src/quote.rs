//! String literal quoting, the injection boundary of the encoder.
//!
//! Every string that ends up between single quotes in generated SQL passes
//! through [`quote_str`].

use crate::dialect::Dialect;

/// Quote `text` as a string literal for `dialect`.
///
/// * PostgreSQL, SQLite, MSSQL: `'` is doubled; PostgreSQL also turns NUL
///   into `\0`. MSSQL literals carry the `N` Unicode prefix.
/// * Oracle: `'` is doubled, but text containing a `TO_TIMESTAMP` or
///   `TO_DATE` call is returned verbatim (it is already an expression).
/// * MySQL: backslash escapes for `\0 \n \r \b \t \\ ' " \x1a`.
pub fn quote_str(dialect: Dialect, text: &str) -> String {
    match dialect {
        Dialect::Postgres => quote_standard(&text.replace('\0', "\\0")),
        Dialect::Sqlite => quote_standard(text),
        Dialect::Mssql => format!("N{}", quote_standard(text)),
        Dialect::Oracle => {
            if is_oracle_expression(text) {
                text.to_string()
            } else {
                quote_standard(text)
            }
        }
        Dialect::MySql => format!("'{}'", backslash_escape(text)),
    }
}

/// Quote `text` without any dialect prefix or pass-through, doubling quotes
/// as in standard SQL.
pub fn quote_standard(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn is_oracle_expression(text: &str) -> bool {
    text.contains("TO_TIMESTAMP") || text.contains("TO_DATE")
}

fn backslash_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\0' => escaped.push_str("\\0"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{8}' => escaped.push_str("\\b"),
            '\t' => escaped.push_str("\\t"),
            '\u{1a}' => escaped.push_str("\\Z"),
            '\\' | '\'' | '"' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
