//! JSON interchange for [`Value`] trees.
//!
//! State trees typically arrive as JSON and leave as JSON. This module
//! provides the strict conversions to and from `serde_json::Value`, the
//! string-level helpers [`Value::from_json_str`] / [`Value::to_json_string`],
//! and `Serialize`/`Deserialize` implementations for `Value`.
//!
//! Absence has no JSON spelling. Rendering follows the JavaScript
//! `JSON.stringify` convention for `undefined`: absent array elements become
//! `null`, absent object entries are dropped, and an absent root is an error.
//! Deserializing can never produce `Absent`.

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DotpathError, Result};
use crate::value::Value;

impl Value {
    /// Parse a JSON string into a `Value`.
    ///
    /// Integers without a fractional part decode as [`Value::Integer`];
    /// everything else numeric decodes as [`Value::Float`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON.
    pub fn from_json_str(json: &str) -> Result<Value> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error for an absent root or a non-finite number anywhere
    /// in the tree.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// Nested absent slots follow the JavaScript convention: array holes
    /// become `null`, absent object entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DotpathError::AbsentRoot`] when `self` is absent and
    /// [`DotpathError::NonFiniteNumber`] for NaN or infinite floats.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        if self.is_absent() {
            return Err(DotpathError::AbsentRoot);
        }
        to_json_inner(self)
    }
}

fn to_json_inner(value: &Value) -> Result<serde_json::Value> {
    use serde_json::Value as Json;

    Ok(match value {
        Value::Absent | Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Integer(i) => Json::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .ok_or(DotpathError::NonFiniteNumber(*f))?,
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) => Json::Array(
            items
                .iter()
                .map(to_json_inner)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(entries) => {
            let mut map = serde_json::Map::new();
            for (key, child) in entries {
                if child.is_absent() {
                    continue;
                }
                map.insert(key.clone(), to_json_inner(child)?);
            }
            Json::Object(map)
        }
    })
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = DotpathError;

    fn try_from(value: Value) -> Result<serde_json::Value> {
        value.to_json()
    }
}

/// Lossy where the strict conversion errors: an absent or NaN value
/// serializes as `null` (absent object entries are still dropped).
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Absent | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, child) in entries {
                    if child.is_absent() {
                        continue;
                    }
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_bool<E: de::Error>(self, b: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(b))
            }

            fn visit_i64<E: de::Error>(self, i: i64) -> std::result::Result<Value, E> {
                Ok(Value::Integer(i))
            }

            fn visit_u64<E: de::Error>(self, u: u64) -> std::result::Result<Value, E> {
                Ok(match i64::try_from(u) {
                    Ok(i) => Value::Integer(i),
                    Err(_) => Value::Float(u as f64),
                })
            }

            fn visit_f64<E: de::Error>(self, f: f64) -> std::result::Result<Value, E> {
                Ok(Value::Float(f))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(s.to_string()))
            }

            fn visit_string<E: de::Error>(self, s: String) -> std::result::Result<Value, E> {
                Ok(Value::String(s))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, child)) = map.next_entry::<String, Value>()? {
                    entries.push((key, child));
                }
                Ok(Value::Object(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
