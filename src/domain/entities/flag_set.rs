//! FlagSet entity - the resolved answers for one render

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::FlagValue;

/// Resolved, validated flag values keyed by flag name
///
/// Only [`crate::domain::services::AnswerResolver`] builds complete sets;
/// `from_pairs` exists for tests and for evaluating predicates in isolation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlagSet {
    values: BTreeMap<String, FlagValue>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set directly from name/value pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, FlagValue)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: FlagValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Boolean flag value, `None` if absent or not a bool
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FlagValue::as_bool)
    }

    /// Text or choice flag value
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FlagValue::as_text)
    }

    /// Multi-select flag value
    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(FlagValue::as_list)
    }

    /// Iterate in flag-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// JSON object of every flag, the base of the render context
    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}
