//! Table definitions read from YAML and rendered as `CREATE TABLE`.
//!
//! ```yaml
//! tables:
//!   - name: users
//!     columns:
//!       - name: id
//!         type: bigint
//!       - name: balance
//!         type:
//!           type: decimal
//!           precision: 10
//!           scale: 2
//!         nullable: true
//! ```

use serde::{Deserialize, Serialize};
use sqltype_core::{CallOptions, DataType, DialectTypes, TypeError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Table not found in schema
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// A column type cannot be rendered for the dialect
    #[error("Column '{column}' of table '{table}': {source}")]
    ColumnType {
        table: String,
        column: String,
        #[source]
        source: TypeError,
    },
}

/// A single column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,

    #[serde(rename = "type")]
    pub column_type: DataType,

    #[serde(default)]
    pub nullable: bool,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, column_type: DataType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
        }
    }

    pub fn nullable(name: impl Into<String>, column_type: DataType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
        }
    }
}

/// A table and its columns, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Render `CREATE TABLE` for `types`' dialect.
    ///
    /// Every column type is checked against the dialect registry first, so
    /// a type the dialect cannot store fails instead of producing DDL the
    /// server would reject.
    pub fn create_table(&self, types: &dyn DialectTypes) -> Result<String, SchemaError> {
        let options = CallOptions::new();
        let mut columns = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let column_error = |source| SchemaError::ColumnType {
                table: self.name.clone(),
                column: column.name.clone(),
                source,
            };
            types
                .ensure_supported(column.column_type.key())
                .map_err(column_error)?;
            let sql = types
                .to_sql(&column.column_type, &options)
                .map_err(column_error)?;
            let null = if column.nullable { "" } else { " NOT NULL" };
            columns.push(format!("  {} {sql}{null}", column.name));
        }
        tracing::debug!(
            "Rendered {} columns of table '{}' for {}",
            columns.len(),
            self.name,
            types.dialect()
        );
        Ok(format!("CREATE TABLE {} (\n{}\n);", self.name, columns.join(",\n")))
    }
}

fn default_version() -> u32 {
    1
}

/// A set of tables loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default = "default_version")]
    pub version: u32,

    pub tables: Vec<TableDefinition>,

    /// Cached table lookup (not serialized)
    #[serde(skip)]
    table_map: HashMap<String, usize>,
}

impl Schema {
    pub fn new(tables: Vec<TableDefinition>) -> Self {
        let mut schema = Self {
            version: default_version(),
            tables,
            table_map: HashMap::new(),
        };
        schema.build_table_map();
        schema
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: Schema = serde_yaml::from_str(yaml)?;
        schema.build_table_map();
        Ok(schema)
    }

    fn build_table_map(&mut self) {
        self.table_map = self
            .tables
            .iter()
            .enumerate()
            .map(|(idx, table)| (table.name.clone(), idx))
            .collect();
    }

    pub fn get_table(&self, name: &str) -> Option<&TableDefinition> {
        self.table_map.get(name).map(|&idx| &self.tables[idx])
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// `CREATE TABLE` statements for every table, in file order.
    pub fn create_tables(&self, types: &dyn DialectTypes) -> Result<Vec<String>, SchemaError> {
        self.tables.iter().map(|t| t.create_table(types)).collect()
    }

    /// `CREATE TABLE` for one named table.
    pub fn create_table(
        &self,
        table: &str,
        types: &dyn DialectTypes,
    ) -> Result<String, SchemaError> {
        self.get_table(table)
            .ok_or_else(|| SchemaError::TableNotFound(table.to_string()))?
            .create_table(types)
    }
}
