//! Tests for deferred-call tree processing

use autowire_application::{DeferredCallOptions, DeferredCallProcessor, is_constant_reference};
use autowire_domain::{
    CallArguments, ConfigMap, ConfigValue, ConstantResolver, DeferredCall, Error, MapKey, Result,
};

/// Constant lookup double with a fixed table
struct StubConstants;

impl ConstantResolver for StubConstants {
    fn resolve_constant(&self, qualified_name: &str) -> Result<ConfigValue> {
        match qualified_name {
            "App.Mailer::DEFAULT_PORT" => Ok(ConfigValue::from(25i64)),
            "PHP_EOL" => Ok(ConfigValue::from("\n")),
            other => Err(Error::undefined_constant(other)),
        }
    }
}

fn seq(items: Vec<ConfigValue>) -> CallArguments {
    CallArguments::Sequence(items)
}

#[test]
fn test_constant_reference_shape() {
    assert!(is_constant_reference("App.Mailer::DEFAULT_PORT"));
    assert!(is_constant_reference("App\\Mailer::PORT_2"));
    assert!(is_constant_reference("::PHP_EOL"));
    assert!(!is_constant_reference("App.Mailer::defaultPort"));
    assert!(!is_constant_reference("App.Mailer::create"));
    assert!(!is_constant_reference("App.Mailer"));
    assert!(!is_constant_reference("a::B c"));
}

#[test]
fn test_filter_ellipsis_keeps_positions() {
    let processor = DeferredCallProcessor::new(&StubConstants);
    let arguments = seq(vec![
        ConfigValue::from(1i64),
        ConfigValue::from("..."),
        ConfigValue::from(3i64),
    ]);

    let filtered = processor.filter_ellipsis(&arguments);
    let expected = CallArguments::Mapping(
        ConfigMap::new()
            .with(MapKey::Index(0), 1i64)
            .with(MapKey::Index(2), 3i64),
    );
    assert_eq!(filtered, expected);
}

#[test]
fn test_filter_trailing_ellipsis_stays_sequence() {
    let processor = DeferredCallProcessor::new(&StubConstants);
    let arguments = seq(vec![ConfigValue::from(1i64), ConfigValue::from("...")]);

    assert_eq!(
        processor.filter_ellipsis(&arguments),
        seq(vec![ConfigValue::from(1i64)])
    );
}

#[test]
fn test_filter_ellipsis_recurses_into_nested_calls() {
    let processor = DeferredCallProcessor::new(&StubConstants);
    let inner = ConfigValue::deferred(
        "Logger",
        ConfigMap::new().with("level", "...").with("name", "app"),
    );
    let arguments = seq(vec![inner, ConfigValue::from(vec![ConfigValue::from("x"), ConfigValue::from("...")])]);

    let filtered = processor.filter_ellipsis(&arguments);
    let expected = seq(vec![
        ConfigValue::from(DeferredCall::new("Logger", ConfigMap::new().with("name", "app"))),
        ConfigValue::from(vec![ConfigValue::from("x")]),
    ]);
    assert_eq!(filtered, expected);
}

#[test]
fn test_custom_ellipsis_marker() {
    let options = DeferredCallOptions {
        ellipsis: "_".to_string(),
        ..DeferredCallOptions::default()
    };
    let processor = DeferredCallProcessor::new(&StubConstants).with_options(options);
    let arguments = seq(vec![ConfigValue::from("..."), ConfigValue::from("_")]);

    assert_eq!(
        processor.filter_ellipsis(&arguments),
        seq(vec![ConfigValue::from("...")])
    );
}

#[test]
fn test_resolve_constants() {
    let processor = DeferredCallProcessor::new(&StubConstants);
    let value = ConfigValue::from(
        ConfigMap::new()
            .with("port", "App.Mailer::DEFAULT_PORT")
            .with("eol", "::PHP_EOL")
            .with("factory", "App.Mailer::create"),
    );

    let resolved = processor.resolve_constants(&value).unwrap();
    let expected = ConfigValue::from(
        ConfigMap::new()
            .with("port", 25i64)
            .with("eol", "\n")
            .with("factory", "App.Mailer::create"),
    );
    assert_eq!(resolved, expected);
}

#[test]
fn test_undefined_constant_fails() {
    let processor = DeferredCallProcessor::new(&StubConstants);

    match processor.resolve_constants(&ConfigValue::from("App.Mailer::MISSING")) {
        Err(Error::UndefinedConstant { name }) => assert_eq!(name, "App.Mailer::MISSING"),
        other => panic!("Expected UndefinedConstant error, got {other:?}"),
    }
}

#[test]
fn test_filter_arguments_combines_passes() {
    let processor = DeferredCallProcessor::new(&StubConstants);
    let arguments = seq(vec![
        ConfigValue::from("App.Mailer::DEFAULT_PORT"),
        ConfigValue::deferred("Transport", vec![ConfigValue::from("..."), ConfigValue::from("::PHP_EOL")]),
    ]);

    let filtered = processor.filter_arguments(&arguments).unwrap();
    let expected = seq(vec![
        ConfigValue::from(25i64),
        ConfigValue::from(DeferredCall::new(
            "Transport",
            CallArguments::Mapping(ConfigMap::new().with(MapKey::Index(1), "\n")),
        )),
    ]);
    assert_eq!(filtered, expected);
}

#[test]
fn test_prefix_namespace() {
    let processor = DeferredCallProcessor::new(&StubConstants);
    let value = ConfigValue::deferred(
        "@extension.factory",
        vec![
            ConfigValue::from("@extension.mailer"),
            ConfigValue::from("@extension"),
            ConfigValue::from("@other.mailer"),
            ConfigValue::from(ConfigMap::new().with("nested", "@extension.logger")),
        ],
    );

    let prefixed = processor.prefix_namespace(&value, "mail");
    let expected = ConfigValue::deferred(
        "@mail.factory",
        vec![
            ConfigValue::from("@mail.mailer"),
            ConfigValue::from("@extension"),
            ConfigValue::from("@other.mailer"),
            ConfigValue::from(ConfigMap::new().with("nested", "@mail.logger")),
        ],
    );
    assert_eq!(prefixed, expected);
}

#[test]
fn test_prefix_namespace_leaves_input_untouched() {
    let processor = DeferredCallProcessor::new(&StubConstants);
    let value = ConfigValue::from(vec![ConfigValue::from("@extension.mailer")]);
    let snapshot = value.clone();

    let _ = processor.prefix_namespace(&value, "mail");
    assert_eq!(value, snapshot);
}

#[test]
fn test_prefix_namespace_requires_reference_separator() {
    let processor = DeferredCallProcessor::new(&StubConstants);
    let value = ConfigValue::from(vec![
        ConfigValue::from("@extensionmailer"),
        ConfigValue::from("@extension:mailer"),
        ConfigValue::from("@extension.mail.queue"),
    ]);

    let prefixed = processor.prefix_namespace(&value, "@mail");
    let expected = ConfigValue::from(vec![
        ConfigValue::from("@extensionmailer"),
        ConfigValue::from("@extension:mailer"),
        ConfigValue::from("@mail.mail.queue"),
    ]);
    assert_eq!(prefixed, expected);
}
