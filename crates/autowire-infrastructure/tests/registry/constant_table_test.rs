//! Constant Table Tests

use autowire_domain::{ConfigValue, ConstantResolver, Error};
use autowire_infrastructure::ConstantTable;

#[test]
fn test_defined_constants_resolve() {
    let table = ConstantTable::new()
        .with("App.Mailer::DEFAULT_PORT", 25i64)
        .with("PHP_EOL", "\n");

    assert_eq!(table.len(), 2);
    assert!(table.is_defined("PHP_EOL"));
    assert_eq!(
        table.resolve_constant("App.Mailer::DEFAULT_PORT").unwrap(),
        ConfigValue::from(25i64)
    );
}

#[test]
fn test_undefined_constant_fails() {
    let table = ConstantTable::new();
    assert!(table.is_empty());

    match table.resolve_constant("App.Mailer::MISSING") {
        Err(Error::UndefinedConstant { name }) => assert_eq!(name, "App.Mailer::MISSING"),
        other => panic!("Expected UndefinedConstant error, got {other:?}"),
    }
}

#[test]
fn test_redefinition_replaces_value() {
    let mut table: ConstantTable = [("LEVEL", 1i64)].into_iter().collect();
    let previous = table.define("LEVEL", 2i64);

    assert_eq!(previous, Some(ConfigValue::from(1i64)));
    assert_eq!(table.resolve_constant("LEVEL").unwrap(), ConfigValue::from(2i64));
}
