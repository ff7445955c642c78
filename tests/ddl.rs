use sqltype::{
    types_for, CallOptions, DataType, DecimalType, Dialect, DialectTypes, NumericOptions,
    NumericType, PhysicalCode, SizeClass, Support, TypeKey, TypeSystem, WarningLog,
};
use std::sync::Arc;

fn render(dialect: Dialect, ty: &DataType) -> String {
    types_for(dialect).to_sql(ty, &CallOptions::new()).unwrap()
}

#[test]
fn test_mysql_unsigned_decimal() {
    let ty = DataType::from(DecimalType::new((10, 2)).unsigned());
    assert_eq!(render(Dialect::MySql, &ty), "DECIMAL(10,2) UNSIGNED");
}

#[test]
fn test_sqlite_puts_modifiers_before_length() {
    let ty = DataType::from(NumericType::integer(11).unsigned());
    assert_eq!(render(Dialect::Sqlite, &ty), "INTEGER UNSIGNED(11)");
    assert_eq!(render(Dialect::MySql, &ty), "INTEGER(11) UNSIGNED");
}

#[test]
fn test_to_sql_is_pure() {
    let system = TypeSystem::with_warnings(Arc::new(WarningLog::new()));
    let types = [
        DataType::string(100),
        DataType::text(SizeClass::Tiny),
        DataType::from(NumericType::big_int(20).unsigned().zerofill()),
        DataType::float((10, 2)),
        DataType::decimal((12, 4)),
        DataType::date(Some(3)),
        DataType::blob(SizeClass::Medium),
        DataType::uuid(),
        DataType::enumeration(["small", "large"]),
        DataType::Boolean,
        DataType::Json,
    ];
    for dialect in Dialect::ALL {
        let dialect_types = system.types_for(dialect);
        for ty in &types {
            let first = dialect_types.to_sql(ty, &CallOptions::new()).unwrap();
            let second = dialect_types.to_sql(ty, &CallOptions::new()).unwrap();
            assert_eq!(first, second, "{dialect} rendering of {ty:?} changed");
        }
    }
}

#[test]
fn test_same_type_across_dialects() {
    let ty = DataType::date(None);
    assert_eq!(render(Dialect::MySql, &ty), "DATETIME");
    assert_eq!(render(Dialect::Postgres, &ty), "TIMESTAMP WITH TIME ZONE");
    assert_eq!(render(Dialect::Sqlite, &ty), "DATETIME");
    assert_eq!(render(Dialect::Mssql, &ty), "DATETIMEOFFSET");
    assert_eq!(render(Dialect::Oracle, &ty), "TIMESTAMP WITH LOCAL TIME ZONE");

    let uuid = DataType::uuid();
    assert_eq!(render(Dialect::MySql, &uuid), "CHAR(36) BINARY");
    assert_eq!(render(Dialect::Postgres, &uuid), "UUID");
    assert_eq!(render(Dialect::Mssql, &uuid), "CHAR(36)");
    assert_eq!(render(Dialect::Oracle, &uuid), "VARCHAR2(36)");
}

#[test]
fn test_dropped_options_warn_once_per_message() {
    let log = Arc::new(WarningLog::new());
    let system = TypeSystem::with_warnings(log.clone());
    let postgres = system.types_for(Dialect::Postgres);
    let ty = DataType::from(NumericType::integer(11).unsigned());
    for _ in 0..3 {
        assert_eq!(postgres.to_sql(&ty, &CallOptions::new()).unwrap(), "INTEGER");
    }
    assert_eq!(log.len(), 1);
    assert!(log.has_warned(
        "PostgresSQL does not support 'INTEGER' with LENGTH, UNSIGNED or ZEROFILL. Plain 'INTEGER' will be used instead."
    ));

    let plain = DataType::integer(NumericOptions::default());
    postgres.to_sql(&plain, &CallOptions::new()).unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn test_registries_are_stable() {
    let first = TypeSystem::with_warnings(Arc::new(WarningLog::new()));
    let second = TypeSystem::with_warnings(Arc::new(WarningLog::new()));
    for dialect in Dialect::ALL {
        let a = first.types_for(dialect).registry();
        let b = second.types_for(dialect).registry();
        assert_eq!(a.len(), b.len());
        for key in TypeKey::ALL {
            assert_eq!(a.support(key), b.support(key), "{dialect} {key}");
        }
    }
}

#[test]
fn test_registry_support_per_dialect() {
    assert_eq!(
        types_for(Dialect::Postgres).support(TypeKey::Range),
        Some(&Support::Codes(vec![
            PhysicalCode::Id(3904),
            PhysicalCode::Id(3926),
            PhysicalCode::Id(3906),
            PhysicalCode::Id(3910),
            PhysicalCode::Id(3912),
        ]))
    );
    for dialect in [Dialect::MySql, Dialect::Sqlite, Dialect::Mssql, Dialect::Oracle] {
        assert!(
            types_for(dialect).ensure_supported(TypeKey::Range).is_err(),
            "{dialect} should reject RANGE"
        );
    }
    assert!(types_for(Dialect::Postgres)
        .ensure_supported(TypeKey::Hstore)
        .is_ok());
}

#[test]
fn test_type_definitions_from_yaml() {
    let ty: DataType = serde_yaml::from_str(
        "type: decimal\nprecision: 10\nscale: 2\nunsigned: true\n",
    )
    .unwrap();
    assert_eq!(render(Dialect::MySql, &ty), "DECIMAL(10,2) UNSIGNED");

    let ty: DataType = serde_yaml::from_str("type: integer\nlength: 11\nunsigned: true\n").unwrap();
    assert_eq!(render(Dialect::Sqlite, &ty), "INTEGER UNSIGNED(11)");

    let misplaced: Result<DataType, _> = serde_yaml::from_str("type: text\nunsigned: true\n");
    assert!(misplaced.is_err());
}
