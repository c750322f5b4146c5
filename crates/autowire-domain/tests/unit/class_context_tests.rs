//! Unit tests for the class context

use autowire_domain::ClassContext;

#[test]
fn test_alias_lookup_is_case_insensitive() {
    let context = ClassContext::new("Test.Space", "Test.Space.Foo").with_alias("Bar", "Other.Bar");

    assert_eq!(context.alias("bar"), Some("Other.Bar"));
    assert_eq!(context.alias("BAR"), Some("Other.Bar"));
    assert_eq!(context.alias("Baz"), None);
}

#[test]
fn test_aliases_are_stored_lower_cased() {
    let context = ClassContext::default().with_alias("MyAlias", "X");
    let aliases: Vec<(&str, &str)> = context.aliases().collect();
    assert_eq!(aliases, vec![("myalias", "X")]);
}
