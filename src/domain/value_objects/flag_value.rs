//! FlagValue value object - one resolved answer

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved flag value
///
/// Choice and text flags both resolve to `Text`; the flag's declaration
/// decides which values are legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl FlagValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FlagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FlagValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short kind name used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FlagValue::Bool(_) => "bool",
            FlagValue::Text(_) => "text",
            FlagValue::List(_) => "list",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FlagValue::Bool(b) => serde_json::Value::Bool(*b),
            FlagValue::Text(s) => serde_json::Value::String(s.clone()),
            FlagValue::List(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|i| serde_json::Value::String(i.clone()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Text(s) => write!(f, "{}", s),
            FlagValue::List(items) if items.is_empty() => write!(f, "[]"),
            FlagValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        FlagValue::Bool(b)
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        FlagValue::Text(s.to_string())
    }
}
