//! Unit tests for the configuration value tree

use autowire_domain::{CallArguments, ConfigMap, ConfigValue, MapKey, Scalar};
use serde_json::json;

#[test]
fn test_from_json_builds_nested_tree() {
    let value = ConfigValue::from(json!({
        "db": { "host": "localhost", "port": 5432 },
        "flags": [true, null, 1.5],
    }));

    let ConfigValue::Mapping(root) = value else {
        panic!("Expected mapping root");
    };
    let Some(ConfigValue::Mapping(db)) = root.get_segment("db") else {
        panic!("Expected db mapping");
    };
    assert_eq!(db.get_segment("host"), Some(&ConfigValue::from("localhost")));
    assert_eq!(db.get_segment("port"), Some(&ConfigValue::from(5432)));
    assert_eq!(
        root.get_segment("flags"),
        Some(&ConfigValue::Sequence(vec![
            ConfigValue::from(true),
            ConfigValue::null(),
            ConfigValue::from(1.5),
        ]))
    );
}

#[test]
fn test_json_object_numeric_keys_become_indices() {
    let value = ConfigValue::from(json!({ "0": "zero", "name": "n" }));
    let ConfigValue::Mapping(map) = value else {
        panic!("Expected mapping");
    };
    assert!(map.contains_key(&MapKey::Index(0)));
    assert!(map.contains_key(&MapKey::Name("name".to_string())));
}

#[test]
fn test_map_preserves_insertion_order() {
    let map = ConfigMap::new().with("z", 1).with("a", 2).with(5usize, 3);
    let keys: Vec<MapKey> = map.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            MapKey::Name("z".to_string()),
            MapKey::Name("a".to_string()),
            MapKey::Index(5),
        ]
    );
}

#[test]
fn test_map_remove() {
    let mut map = ConfigMap::new().with("a", 1).with("b", 2);
    assert_eq!(map.remove(&MapKey::from("a")), Some(ConfigValue::from(1)));
    assert_eq!(map.len(), 1);
    assert_eq!(map.remove(&MapKey::from("a")), None);
}

#[test]
fn test_value_accessors() {
    assert_eq!(ConfigValue::from("text").as_str(), Some("text"));
    assert_eq!(ConfigValue::from(3).as_str(), None);
    assert!(ConfigValue::null().is_null());
    assert!(ConfigValue::code("foo()").is_code());
    assert_eq!(
        ConfigValue::from(false).as_scalar(),
        Some(&Scalar::Bool(false))
    );
}

#[test]
fn test_kind_names() {
    assert_eq!(ConfigValue::null().kind(), "null");
    assert_eq!(ConfigValue::Sequence(Vec::new()).kind(), "sequence");
    assert_eq!(ConfigValue::from(ConfigMap::new()).kind(), "mapping");
    assert_eq!(
        ConfigValue::deferred("Foo", Vec::<ConfigValue>::new()).kind(),
        "deferred call"
    );
    assert_eq!(ConfigValue::code("x").kind(), "code");
}

#[test]
fn test_call_arguments_into_value() {
    let sequence = CallArguments::from(vec![ConfigValue::from(1)]);
    assert_eq!(sequence.len(), 1);
    assert_eq!(
        sequence.into_value(),
        ConfigValue::Sequence(vec![ConfigValue::from(1)])
    );

    let mapping = CallArguments::from(ConfigMap::new().with("a", 1));
    assert!(matches!(mapping.into_value(), ConfigValue::Mapping(_)));
    assert!(CallArguments::default().is_empty());
}

#[test]
fn test_from_json_keeps_object_key_order() {
    let value = ConfigValue::from(json!({ "zeta": 1, "alpha": 2, "mid": { "b": 1, "a": 2 } }));
    let ConfigValue::Mapping(root) = value else {
        panic!("Expected mapping");
    };
    let keys: Vec<String> = root.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

    let Some(ConfigValue::Mapping(mid)) = root.get_segment("mid") else {
        panic!("Expected nested mapping");
    };
    let keys: Vec<String> = mid.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_map_remove_keeps_remaining_order() {
    let mut map = ConfigMap::new().with("a", 1).with("b", 2).with("c", 3);
    map.remove(&MapKey::from("a"));
    let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["b", "c"]);
}
