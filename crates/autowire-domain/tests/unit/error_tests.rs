//! Unit tests for domain error types

use autowire_domain::{Error, MissingServiceReason};

#[test]
fn test_circular_reference_lists_chain() {
    let error = Error::circular_reference(["a", "b", "a"]);
    match &error {
        Error::CircularReference { chain } => assert_eq!(chain, &vec!["a", "b", "a"]),
        _ => panic!("Expected CircularReference error"),
    }
    assert_eq!(
        error.to_string(),
        "Circular reference detected for parameters: a, b, a"
    );
}

#[test]
fn test_missing_parameter_error() {
    let error = Error::missing_parameter("db.host");
    match &error {
        Error::MissingParameter { name } => assert_eq!(name, "db.host"),
        _ => panic!("Expected MissingParameter error"),
    }
    assert!(error.to_string().contains("db.host"));
}

#[test]
fn test_service_not_found_messages_differ_by_reason() {
    let no_instance = Error::service_not_found(
        "App.Mailer",
        "mailer",
        "Newsletter::__construct",
        MissingServiceReason::NoInstance,
    );
    let unknown = Error::service_not_found(
        "App.Mailer",
        "mailer",
        "Newsletter::__construct",
        MissingServiceReason::UnknownType,
    );

    let no_instance_msg = no_instance.to_string();
    let unknown_msg = unknown.to_string();

    assert!(no_instance_msg.starts_with("Service of type App.Mailer required by $mailer"));
    assert!(no_instance_msg.contains("Newsletter::__construct()"));
    assert!(unknown_msg.starts_with("Class 'App.Mailer' required by $mailer"));
    assert_ne!(no_instance_msg, unknown_msg);
}

#[test]
fn test_unresolvable_parameter_error() {
    let error = Error::unresolvable_parameter("port", "Server::__construct");
    assert_eq!(
        error.to_string(),
        "Parameter $port in Server::__construct() has no class type or default value, so its value must be specified"
    );
}

#[test]
fn test_extra_arguments_lists_leftovers() {
    let error = Error::extra_arguments("factory", vec!["$unused".to_string(), "#3".to_string()]);
    match &error {
        Error::ExtraArguments { callable, leftovers } => {
            assert_eq!(callable, "factory");
            assert_eq!(leftovers.len(), 2);
        }
        _ => panic!("Expected ExtraArguments error"),
    }
    assert!(error.to_string().contains("$unused, #3"));
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("Failed to read config", io);
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Failed to read config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_invalid_reference_display() {
    assert!(Error::InvalidReference.to_string().contains("must not be empty"));
}
