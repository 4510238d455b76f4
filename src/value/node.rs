//! The `ConfigValue` node type and its typed accessors.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CfgError, CfgResult};

/// A single node of a configuration document.
///
/// Composite nodes own their children; accessors only hand out borrows that
/// are tied to the borrow of the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Boolean(bool),
    Integer(i64),
    /// Also holds integers outside the `i64` range (unsigned values above
    /// `i64::MAX`), which lose precision beyond 2^53.
    Float(f64),
    String(String),
    Array(Vec<ConfigValue>),
    Object(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Name of the node kind, used in `TypeMismatch` errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Array(_) => "array",
            ConfigValue::Object(_) => "object",
        }
    }

    fn mismatch(&self, expected: &'static str) -> CfgError {
        CfgError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Returns true for every kind except arrays and objects.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, ConfigValue::Array(_) | ConfigValue::Object(_))
    }

    /// Look up a child of an object node.
    pub fn get(&self, key: &str) -> CfgResult<&ConfigValue> {
        match self {
            ConfigValue::Object(map) => map
                .get(key)
                .ok_or_else(|| CfgError::NotFound(key.to_string())),
            other => Err(other.mismatch("object")),
        }
    }

    /// Like [`get`](Self::get) but maps an absent key to `None`.
    ///
    /// A wrong node kind is still an error.
    pub fn get_opt(&self, key: &str) -> CfgResult<Option<&ConfigValue>> {
        match self.get(key) {
            Ok(v) => Ok(Some(v)),
            Err(CfgError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Mutable child lookup on an object node.
    pub fn get_mut(&mut self, key: &str) -> CfgResult<&mut ConfigValue> {
        match self {
            ConfigValue::Object(map) => map
                .get_mut(key)
                .ok_or_else(|| CfgError::NotFound(key.to_string())),
            other => Err(other.mismatch("object")),
        }
    }

    /// Insert or replace a child of an object node, returning the old child.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) -> CfgResult<Option<ConfigValue>> {
        match self {
            ConfigValue::Object(map) => Ok(map.insert(key.into(), value)),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn array_len(&self) -> CfgResult<usize> {
        match self {
            ConfigValue::Array(items) => Ok(items.len()),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn array_get(&self, index: usize) -> CfgResult<&ConfigValue> {
        match self {
            ConfigValue::Array(items) => items.get(index).ok_or(CfgError::IndexOutOfRange {
                index,
                len: items.len(),
            }),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn array_get_mut(&mut self, index: usize) -> CfgResult<&mut ConfigValue> {
        match self {
            ConfigValue::Array(items) => {
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(CfgError::IndexOutOfRange { index, len })
            }
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_str(&self) -> CfgResult<&str> {
        match self {
            ConfigValue::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_i64(&self) -> CfgResult<i64> {
        match self {
            ConfigValue::Integer(i) => Ok(*i),
            other => Err(other.mismatch("integer")),
        }
    }

    /// Integers are widened, so `5` reads as `5.0`.
    pub fn as_f64(&self) -> CfgResult<f64> {
        match self {
            ConfigValue::Float(f) => Ok(*f),
            ConfigValue::Integer(i) => Ok(*i as f64),
            other => Err(other.mismatch("float")),
        }
    }

    pub fn as_bool(&self) -> CfgResult<bool> {
        match self {
            ConfigValue::Boolean(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn as_array(&self) -> CfgResult<&[ConfigValue]> {
        match self {
            ConfigValue::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_object(&self) -> CfgResult<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Object(map) => Ok(map),
            other => Err(other.mismatch("object")),
        }
    }

    /// Canonical string form of a leaf node.
    ///
    /// Strings are returned as-is, numbers in their shortest decimal form,
    /// booleans as `true`/`false` and null as `null`.
    pub fn to_scalar_string(&self) -> CfgResult<String> {
        match self {
            ConfigValue::Null => Ok("null".to_string()),
            ConfigValue::Boolean(b) => Ok(b.to_string()),
            ConfigValue::Integer(i) => Ok(i.to_string()),
            ConfigValue::Float(f) => Ok(f.to_string()),
            ConfigValue::String(s) => Ok(s.clone()),
            other => Err(other.mismatch("scalar")),
        }
    }

    /// Convert into a `serde_json::Value`.
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            ConfigValue::Null => Value::Null,
            ConfigValue::Boolean(b) => Value::Bool(*b),
            ConfigValue::Integer(i) => Value::from(*i),
            ConfigValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            ConfigValue::String(s) => Value::String(s.clone()),
            ConfigValue::Array(items) => Value::Array(items.iter().map(|v| v.to_json()).collect()),
            ConfigValue::Object(map) => Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }

    /// Build an array of strings.
    pub fn string_array<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigValue::Array(items.into_iter().map(|s| ConfigValue::String(s.into())).collect())
    }
}

/// Numbers that fit `i64` become `Integer`; everything else, including
/// unsigned values above `i64::MAX`, widens to `Float`.
impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ConfigValue::String(s),
            Value::Array(items) => ConfigValue::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                ConfigValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Boolean(b)
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::Object(BTreeMap::new())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigValue {
        ConfigValue::from(json!({
            "encoding": {"type": "jpeg", "level": 95},
            "ratio": 55.5,
            "enabled": true,
            "Topics": ["camera1_stream", "camera2_stream"],
            "Empty": [],
            "Nothing": null
        }))
    }

    #[test]
    fn test_object_get() {
        let doc = sample();
        assert_eq!(doc.get("ratio").unwrap(), &ConfigValue::Float(55.5));
        assert_eq!(
            doc.get("missing").unwrap_err(),
            CfgError::NotFound("missing".into())
        );

        let leaf = doc.get("enabled").unwrap();
        assert!(matches!(
            leaf.get("x"),
            Err(CfgError::TypeMismatch { expected: "object", found: "boolean" })
        ));
    }

    #[test]
    fn test_get_opt_distinguishes_absent_from_wrong_shape() {
        let doc = sample();
        assert!(doc.get_opt("missing").unwrap().is_none());
        assert!(doc.get_opt("Topics").unwrap().is_some());
        assert!(doc.get("ratio").unwrap().get_opt("x").is_err());
    }

    #[test]
    fn test_array_access() {
        let doc = sample();
        let topics = doc.get("Topics").unwrap();
        assert_eq!(topics.array_len().unwrap(), 2);
        assert_eq!(topics.array_get(1).unwrap().as_str().unwrap(), "camera2_stream");
        assert_eq!(
            topics.array_get(2).unwrap_err(),
            CfgError::IndexOutOfRange { index: 2, len: 2 }
        );

        let empty = doc.get("Empty").unwrap();
        assert_eq!(empty.array_len().unwrap(), 0);

        let not_array = doc.get("ratio").unwrap();
        assert!(matches!(not_array.array_len(), Err(CfgError::TypeMismatch { .. })));
        assert!(matches!(not_array.array_get(0), Err(CfgError::TypeMismatch { .. })));
    }

    #[test]
    fn test_scalar_string() {
        assert_eq!(ConfigValue::Integer(42).to_scalar_string().unwrap(), "42");
        assert_eq!(ConfigValue::Float(55.5).to_scalar_string().unwrap(), "55.5");
        assert_eq!(ConfigValue::Boolean(false).to_scalar_string().unwrap(), "false");
        assert_eq!(ConfigValue::Null.to_scalar_string().unwrap(), "null");
        assert_eq!(ConfigValue::from("tcp").to_scalar_string().unwrap(), "tcp");

        let doc = sample();
        assert!(matches!(
            doc.get("encoding").unwrap().to_scalar_string(),
            Err(CfgError::TypeMismatch { expected: "scalar", found: "object" })
        ));
    }

    #[test]
    fn test_json_conversion_keeps_numeric_kinds() {
        let doc = sample();
        let level = doc.get("encoding").unwrap().get("level").unwrap();
        assert_eq!(level, &ConfigValue::Integer(95));
        assert_eq!(level.as_f64().unwrap(), 95.0);
        assert_eq!(doc.to_json()["encoding"]["type"], "jpeg");
        assert_eq!(ConfigValue::Float(f64::INFINITY).to_json(), serde_json::Value::Null);
    }

    #[test]
    fn test_large_unsigned_widens_to_float() {
        let edge = ConfigValue::from(json!(i64::MAX as u64));
        assert_eq!(edge, ConfigValue::Integer(i64::MAX));

        let big = ConfigValue::from(json!(u64::MAX));
        assert_eq!(big.kind(), "float");
        assert_eq!(big.as_f64().unwrap(), u64::MAX as f64);

        // Documents parsed through serde take the same path
        let parsed: ConfigValue = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(parsed, big);
    }

    #[test]
    fn test_insert_replaces_child() {
        let mut doc = sample();
        let old = doc
            .insert("Topics", ConfigValue::string_array(["a"]))
            .unwrap()
            .unwrap();
        assert_eq!(old.array_len().unwrap(), 2);
        assert_eq!(doc.get("Topics").unwrap().array_len().unwrap(), 1);
        assert!(ConfigValue::Integer(1).insert("k", ConfigValue::Null).is_err());
    }
}
