//! Tests for symbolic-name resolution

use autowire_application::NameResolver;
use autowire_domain::{ClassContext, Error};

fn dotted_context() -> ClassContext {
    ClassContext::new("Test.Space", "Test.Space.Foo").with_alias("B", "BBB")
}

#[test]
fn test_alias_head_is_replaced() {
    let resolver = NameResolver::new().with_separator('.');
    assert_eq!(resolver.expand("B.Foo", &dotted_context()).unwrap(), "BBB.Foo");
    assert_eq!(resolver.expand("B", &dotted_context()).unwrap(), "BBB");
}

#[test]
fn test_alias_lookup_is_case_insensitive() {
    let resolver = NameResolver::new().with_separator('.');
    assert_eq!(resolver.expand("b.Foo", &dotted_context()).unwrap(), "BBB.Foo");
}

#[test]
fn test_unknown_name_is_qualified_with_namespace() {
    let resolver = NameResolver::new().with_separator('.');
    assert_eq!(
        resolver.expand("Notdef", &dotted_context()).unwrap(),
        "Test.Space.Notdef"
    );
    assert_eq!(
        resolver.expand("Sub.Notdef", &dotted_context()).unwrap(),
        "Test.Space.Sub.Notdef"
    );
}

#[test]
fn test_absolute_name_is_stripped() {
    let resolver = NameResolver::new().with_separator('.');
    assert_eq!(resolver.expand(".Absolute", &dotted_context()).unwrap(), "Absolute");

    let context = ClassContext::new("Test\\Space", "Test\\Space\\Foo");
    assert_eq!(NameResolver::new().expand("\\Absolute", &context).unwrap(), "Absolute");
    assert_eq!(
        NameResolver::new().expand("\\B\\Foo", &context).unwrap(),
        "B\\Foo"
    );
}

#[test]
fn test_self_and_static_yield_self_name() {
    let resolver = NameResolver::new().with_separator('.');
    assert_eq!(resolver.expand("self", &dotted_context()).unwrap(), "Test.Space.Foo");
    assert_eq!(resolver.expand("Static", &dotted_context()).unwrap(), "Test.Space.Foo");
}

#[test]
fn test_builtin_types_are_lowercased_and_unqualified() {
    let resolver = NameResolver::new().with_separator('.');
    assert_eq!(resolver.expand("String", &dotted_context()).unwrap(), "string");
    assert_eq!(resolver.expand("int", &dotted_context()).unwrap(), "int");
}

#[test]
fn test_empty_namespace_leaves_name_unqualified() {
    let context = ClassContext::new("", "Foo");
    assert_eq!(NameResolver::new().expand("Bar", &context).unwrap(), "Bar");
}

#[test]
fn test_default_separator_is_backslash() {
    let context = ClassContext::new("App\\Mail", "App\\Mail\\Mailer").with_alias("Log", "Psr\\Log");
    let resolver = NameResolver::default();
    assert_eq!(resolver.separator(), '\\');
    assert_eq!(
        resolver.expand("Log\\LoggerInterface", &context).unwrap(),
        "Psr\\Log\\LoggerInterface"
    );
    assert_eq!(resolver.expand("Message", &context).unwrap(), "App\\Mail\\Message");
}

#[test]
fn test_empty_name_is_invalid_reference() {
    let result = NameResolver::new().expand("", &dotted_context());
    match result {
        Err(Error::InvalidReference) => {}
        other => panic!("Expected InvalidReference error, got {other:?}"),
    }
}
