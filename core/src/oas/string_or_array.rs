#![deny(missing_docs)]

//! # String-or-Array Fields
//!
//! OpenAPI 3.1 allows `type: [string, "null"]` while 2.0 and 3.0 only allow a scalar.
//! Both shapes decode into [`StringOrArray`], an ordered list whose first element is
//! the effective simple type.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A field that may appear as a single string or a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringOrArray(Vec<String>);

impl StringOrArray {
    /// Returns the first entry, or `""` when the list is empty.
    pub fn first(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    /// All entries in source order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns true when no entry is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for StringOrArray {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl<'de> Deserialize<'de> for StringOrArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::default()),
            Value::String(s) => Ok(Self(vec![s])),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(DeError::custom(format!(
                        "field must be a string or array of strings, found element {}",
                        other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self),
            _ => Err(DeError::custom("field must be a string or array of strings")),
        }
    }
}
