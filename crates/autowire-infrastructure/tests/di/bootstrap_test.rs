//! Wiring Context Tests

use autowire_domain::{
    ArgumentPool, CallArguments, CallableSignature, ClassContext, ConfigValue, Error,
    ParameterSpec, ParameterTree, ResolvedArgument, ServiceReference,
};
use autowire_infrastructure::config::{ConfigBuilder, DeferredConfig, ExpansionConfig};
use autowire_infrastructure::{ConstantTable, InMemoryServiceRegistry, WiringContext, init_wiring};
use serde_json::json;
use std::sync::Arc;

fn context() -> WiringContext {
    let registry = InMemoryServiceRegistry::new();
    registry.register("mailer", ["App.Mailer"]);
    let constants = ConstantTable::new().with("App.Mailer::DEFAULT_PORT", 25i64);
    let config = ConfigBuilder::new()
        .with_separator('.')
        .with_expansion(ExpansionConfig {
            recursive: true,
            ..ExpansionConfig::default()
        })
        .build();

    WiringContext::new(config, Arc::new(registry), Arc::new(constants)).unwrap()
}

#[test]
fn test_init_wiring_with_defaults() {
    let context = init_wiring(ConfigBuilder::new().build()).unwrap();

    assert_eq!(context.name_resolver().separator(), '\\');
    assert!(!context.expander(&ParameterTree::default()).options().recursive);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ConfigBuilder::new()
        .with_deferred(DeferredConfig {
            ellipsis: String::new(),
            ..DeferredConfig::default()
        })
        .build();

    assert!(matches!(init_wiring(config), Err(Error::Configuration { .. })));
}

#[test]
fn test_engines_follow_configuration() {
    let context = context();

    let class = ClassContext::new("App.Mail", "App.Mail.Newsletter");
    assert_eq!(
        context.name_resolver().expand("Mailer", &class).unwrap(),
        "App.Mail.Mailer"
    );

    let params = ParameterTree::from_json(json!({ "host": "smtp.local", "dsn": "smtp://%host%" })).unwrap();
    assert_eq!(
        context.expander(&params).expand(&ConfigValue::from("%dsn%")).unwrap(),
        ConfigValue::from("smtp://smtp.local")
    );
}

#[test]
fn test_deferred_call_pipeline() {
    let context = context();

    let arguments = CallArguments::Sequence(vec![
        ConfigValue::from("..."),
        ConfigValue::from("App.Mailer::DEFAULT_PORT"),
    ]);
    let filtered = context.deferred_calls().filter_arguments(&arguments).unwrap();

    let signature = CallableSignature::new("Newsletter::__construct")
        .with_parameter(ParameterSpec::new("mailer").typed("App.Mailer"))
        .with_parameter(ParameterSpec::new("port").with_default(587i64));

    let resolved = context
        .autowirer()
        .resolve(&signature, ArgumentPool::from(filtered))
        .unwrap();
    assert_eq!(
        resolved,
        vec![
            ResolvedArgument::Service(ServiceReference::new("mailer")),
            ResolvedArgument::Value(ConfigValue::from(25i64)),
        ]
    );
}

#[test]
fn test_context_is_cloneable_and_shared() {
    let context = context();
    let clone = context.clone();

    assert_eq!(clone.config(), context.config());
    assert!(format!("{clone:?}").contains("WiringContext"));
}
