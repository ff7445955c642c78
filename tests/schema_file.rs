use sqltype::{types_for, Dialect, Schema, SchemaError};
use std::io::Write;

const SCHEMA: &str = r#"
version: 1
tables:
  - name: products
    columns:
      - name: id
        type: integer
      - name: title
        type:
          type: string
          length: 80
      - name: price
        type:
          type: decimal
          precision: 8
          scale: 2
      - name: photo
        type: blob
        nullable: true
"#;

fn schema_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_create_table_from_file() {
    let file = schema_file(SCHEMA);
    let schema = Schema::from_file(file.path()).unwrap();

    assert_eq!(
        schema.create_table("products", types_for(Dialect::Mssql)).unwrap(),
        "CREATE TABLE products (\n  id INTEGER NOT NULL,\n  title NVARCHAR(80) NOT NULL,\n  price DECIMAL(8,2) NOT NULL,\n  photo VARBINARY(MAX)\n);"
    );
    assert_eq!(
        schema.create_table("products", types_for(Dialect::Postgres)).unwrap(),
        "CREATE TABLE products (\n  id INTEGER NOT NULL,\n  title VARCHAR(80) NOT NULL,\n  price DECIMAL(8,2) NOT NULL,\n  photo BYTEA\n);"
    );
    assert_eq!(schema.create_tables(types_for(Dialect::Oracle)).unwrap().len(), 1);
}

#[test]
fn test_invalid_files() {
    assert!(matches!(
        Schema::from_file("/nonexistent/schema.yaml"),
        Err(SchemaError::IoError(_))
    ));
    let file = schema_file("tables:\n  - name: t\n    columns:\n      - name: c\n        type: imaginary\n");
    assert!(matches!(
        Schema::from_file(file.path()),
        Err(SchemaError::YamlError(_))
    ));
}
