//! Configuration value tree
//!
//! [`ConfigValue`] is the closed tagged union every engine walks. Traversals
//! match it exhaustively; there is no dynamic "anything" escape hatch.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Leaf value of a configuration tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Text form used when the scalar is spliced into a larger string
    ///
    /// `true` renders as `1`, `false` and `null` as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null | Self::Bool(false) => String::new(),
            Self::Bool(true) => "1".to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::String(value) => value.clone(),
        }
    }
}

/// Key of a [`ConfigMap`] entry
///
/// Integer-like names are normalized to [`MapKey::Index`] on conversion, so
/// `"0"` and `0` address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapKey {
    Index(usize),
    Name(String),
}

impl MapKey {
    /// Parse a textual key, normalizing canonical decimal integers to indices
    pub fn parse(key: &str) -> Self {
        let canonical = !key.is_empty()
            && key.bytes().all(|b| b.is_ascii_digit())
            && (key == "0" || !key.starts_with('0'));
        match key.parse::<usize>() {
            Ok(index) if canonical => Self::Index(index),
            _ => Self::Name(key.to_string()),
        }
    }

    /// The key as a name, if it is one
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// The key as an index, if it is one
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for MapKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl From<String> for MapKey {
    fn from(key: String) -> Self {
        Self::parse(&key)
    }
}

impl From<usize> for MapKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Insertion-ordered map with unique keys
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap {
    entries: IndexMap<MapKey, ConfigValue>,
}

impl ConfigMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing (in place) any previous value under the key
    pub fn insert(&mut self, key: impl Into<MapKey>, value: ConfigValue) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<MapKey>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &MapKey) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Look up an entry by a textual path segment
    pub fn get_segment(&self, segment: &str) -> Option<&ConfigValue> {
        self.get(&MapKey::parse(segment))
    }

    /// Remove an entry, keeping the order of the rest
    pub fn remove(&mut self, key: &MapKey) -> Option<ConfigValue> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &MapKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &ConfigValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &MapKey> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &ConfigValue> {
        self.entries.values()
    }
}

impl<K: Into<MapKey>> FromIterator<(K, ConfigValue)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, ConfigValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}

impl IntoIterator for ConfigMap {
    type Item = (MapKey, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<MapKey, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Raw expression text produced by placeholder expansion
///
/// Code literals come out of the expansion engine, either directly or because
/// a dynamic parameter in the parameter tree was spliced into a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLiteral(String);

impl CodeLiteral {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CodeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Argument list of a deferred call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CallArguments {
    Sequence(Vec<ConfigValue>),
    Mapping(ConfigMap),
}

impl CallArguments {
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Argument values in order, ignoring keys
    pub fn values(&self) -> Box<dyn Iterator<Item = &ConfigValue> + '_> {
        match self {
            Self::Sequence(items) => Box::new(items.iter()),
            Self::Mapping(map) => Box::new(map.values()),
        }
    }

    /// View the arguments as an ordinary configuration value
    pub fn into_value(self) -> ConfigValue {
        match self {
            Self::Sequence(items) => ConfigValue::Sequence(items),
            Self::Mapping(map) => ConfigValue::Mapping(map),
        }
    }
}

impl Default for CallArguments {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl From<Vec<ConfigValue>> for CallArguments {
    fn from(items: Vec<ConfigValue>) -> Self {
        Self::Sequence(items)
    }
}

impl From<ConfigMap> for CallArguments {
    fn from(map: ConfigMap) -> Self {
        Self::Mapping(map)
    }
}

/// "Construct this entity, then apply these arguments", kept unevaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredCall {
    pub entity: ConfigValue,
    pub arguments: CallArguments,
}

impl DeferredCall {
    pub fn new(entity: impl Into<ConfigValue>, arguments: impl Into<CallArguments>) -> Self {
        Self {
            entity: entity.into(),
            arguments: arguments.into(),
        }
    }
}

/// Node of a configuration tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfigValue {
    Scalar(Scalar),
    Sequence(Vec<ConfigValue>),
    Mapping(ConfigMap),
    Deferred(Box<DeferredCall>),
    Code(CodeLiteral),
}

impl ConfigValue {
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }

    pub fn code(expression: impl Into<String>) -> Self {
        Self::Code(CodeLiteral::new(expression))
    }

    pub fn deferred(entity: impl Into<ConfigValue>, arguments: impl Into<CallArguments>) -> Self {
        Self::Deferred(Box::new(DeferredCall::new(entity, arguments)))
    }

    /// The string payload of a scalar string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }

    /// Short variant name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(Scalar::Bool(_)) => "bool",
            Self::Scalar(Scalar::Int(_)) => "int",
            Self::Scalar(Scalar::Float(_)) => "float",
            Self::Scalar(Scalar::String(_)) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Deferred(_) => "deferred call",
            Self::Code(_) => "code",
        }
    }
}

impl From<Scalar> for ConfigValue {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        Self::Sequence(items)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        Self::Mapping(map)
    }
}

impl From<DeferredCall> for ConfigValue {
    fn from(call: DeferredCall) -> Self {
        Self::Deferred(Box::new(call))
    }
}

impl From<CodeLiteral> for ConfigValue {
    fn from(code: CodeLiteral) -> Self {
        Self::Code(code)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::null(),
            Value::Bool(flag) => flag.into(),
            Value::Number(number) => match number.as_i64() {
                Some(int) => int.into(),
                None => number.as_f64().map_or_else(Self::null, Into::into),
            },
            Value::String(text) => text.into(),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(object) => Self::Mapping(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}
