//! Configuration Validation Tests

use autowire_domain::Error;
use autowire_infrastructure::config::{ConfigBuilder, ConfigLoader, DeferredConfig, ExpansionConfig, LoggingConfig};
use figment::Jail;

fn expect_configuration_error(result: autowire_domain::Result<autowire_infrastructure::AppConfig>, needle: &str) {
    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains(needle), "unexpected message: {message}");
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_default_config_is_valid() {
    assert!(ConfigBuilder::new().try_build().is_ok());
}

#[test]
fn test_multi_character_separator_rejected() {
    let mut config = ConfigBuilder::new().build();
    config.naming.separator = "::".to_string();
    let result = autowire_infrastructure::config::loader::validate_app_config(&config).map(|()| config);
    expect_configuration_error(result, "single character");
}

#[test]
fn test_empty_concat_operator_rejected() {
    let result = ConfigBuilder::new()
        .with_expansion(ExpansionConfig {
            recursive: false,
            concat_operator: String::new(),
        })
        .try_build();
    expect_configuration_error(result, "Concatenation operator");
}

#[test]
fn test_empty_markers_rejected() {
    let result = ConfigBuilder::new()
        .with_deferred(DeferredConfig {
            ellipsis: String::new(),
            ..DeferredConfig::default()
        })
        .try_build();
    expect_configuration_error(result, "Ellipsis marker");

    let result = ConfigBuilder::new()
        .with_deferred(DeferredConfig {
            extension_prefix: String::new(),
            ..DeferredConfig::default()
        })
        .try_build();
    expect_configuration_error(result, "Extension prefix");
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "loud".to_string(),
            ..LoggingConfig::default()
        })
        .try_build();
    expect_configuration_error(result, "Invalid log level");
}

#[test]
fn test_loader_rejects_invalid_environment() {
    Jail::expect_with(|jail| {
        jail.set_env("AUTOWIRE__NAMING__SEPARATOR", "ab");
        match ConfigLoader::new().load() {
            Err(Error::Configuration { .. }) => Ok(()),
            other => Err(format!("Expected Configuration error, got {other:?}").into()),
        }
    });
}
