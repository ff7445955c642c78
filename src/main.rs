//! Command-line interface for sqltype
//!
//! # Usage Examples
//!
//! ## DDL
//! ```bash
//! # One column type
//! sqltype ddl --dialect sqlite '{type: integer, length: 11, unsigned: true}'
//!
//! # Every table of a schema file
//! sqltype tables --dialect mssql --schema-file schema.yaml
//! ```
//!
//! ## Literals
//! ```bash
//! # A JSON value as a literal
//! sqltype escape --dialect mysql '[1, [2, 3]]'
//!
//! # Positional and named placeholders
//! sqltype format --dialect postgres 'SELECT ? AS a' --values '["x"]'
//! sqltype format --dialect postgres 'SELECT :id::text' --values '{"id": 5}'
//! ```
//!
//! Dialect warnings are logged through `tracing`; set `RUST_LOG=warn` to see
//! them.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqltype::{
    escape, format, format_named, types_for, value_from_json, CallOptions, DataType, Dialect,
    Schema, SqlValue,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqltype")]
#[command(about = "Render SQL column types and literals for a database dialect")]
#[command(long_about = None)]
struct Cli {
    /// Target dialect (mysql, mariadb, postgres, sqlite, mssql, oracle)
    #[arg(long, global = true, default_value = "mysql", env = "SQLTYPE_DIALECT")]
    dialect: Dialect,

    /// IANA zone name or +HH:MM offset applied to temporal values
    #[arg(long, global = true, env = "SQLTYPE_TIMEZONE")]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the DDL fragment of a type definition (YAML or JSON)
    Ddl {
        /// Type definition, e.g. `bigint` or `{type: decimal, precision: 10}`
        definition: String,
    },

    /// Render CREATE TABLE statements from a schema file
    Tables {
        /// Path to the YAML schema file
        #[arg(long)]
        schema_file: PathBuf,

        /// Only render this table
        #[arg(long)]
        table: Option<String>,
    },

    /// Encode a JSON value as a SQL literal
    Escape {
        /// JSON value to encode
        value: String,

        /// Render arrays as placeholder lists
        #[arg(long)]
        format: bool,
    },

    /// Substitute `?` or `:name` placeholders in a statement
    Format {
        /// SQL statement with placeholders
        sql: String,

        /// JSON array for `?` placeholders or object for `:name` placeholders
        #[arg(long, default_value = "[]")]
        values: String,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let timezone = cli.timezone.as_deref();

    match cli.command {
        Commands::Ddl { definition } => {
            let ty: DataType = serde_yaml::from_str(&definition)
                .with_context(|| format!("Invalid type definition: {definition}"))?;
            let types = types_for(cli.dialect);
            types.ensure_supported(ty.key())?;
            let mut options = CallOptions::new();
            if let Some(tz) = timezone {
                options = options.with_timezone(tz);
            }
            println!("{}", types.to_sql(&ty, &options)?);
        }
        Commands::Tables { schema_file, table } => {
            let schema = Schema::from_file(&schema_file)
                .with_context(|| format!("Failed to load schema from {schema_file:?}"))?;
            let types = types_for(cli.dialect);
            let statements = match table {
                Some(name) => vec![schema.create_table(&name, types)?],
                None => schema.create_tables(types)?,
            };
            println!("{}", statements.join("\n\n"));
        }
        Commands::Escape {
            value,
            format: as_list,
        } => {
            let value = parse_json(&value)?;
            println!("{}", escape(&value, timezone, cli.dialect, as_list)?);
        }
        Commands::Format { sql, values } => {
            let values: serde_json::Value = serde_json::from_str(&values)
                .with_context(|| format!("Invalid JSON values: {values}"))?;
            let rendered = match values {
                serde_json::Value::Object(map) => {
                    let named: BTreeMap<String, SqlValue> = map
                        .into_iter()
                        .map(|(name, value)| (name, value_from_json(value)))
                        .collect();
                    format_named(&sql, &named, timezone, cli.dialect)?
                }
                serde_json::Value::Array(items) => {
                    let positional: Vec<SqlValue> =
                        items.into_iter().map(value_from_json).collect();
                    format(&sql, &positional, timezone, cli.dialect)?
                }
                other => anyhow::bail!("--values must be a JSON array or object, got {other}"),
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

fn parse_json(text: &str) -> anyhow::Result<SqlValue> {
    let json: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("Invalid JSON value: {text}"))?;
    Ok(value_from_json(json))
}
