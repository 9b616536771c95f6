//! Answer resolution
//!
//! Turns a raw, possibly partial answer mapping into a complete [`FlagSet`]:
//! defaults fill the gaps, every value is checked against its flag's domain,
//! and compatibility rules run only once every value is individually valid.
//! The caller gets either a full set or every problem found.

use serde_json::Value;

use crate::domain::entities::{CompatibilityRule, FlagDefault, FlagKind, FlagSet, FlagSpec};
use crate::domain::value_objects::FlagValue;
use crate::error::{ValidationError, ValidationErrors};

/// Raw answers as read from files, config and `--set` overrides
pub type RawAnswers = serde_json::Map<String, Value>;

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub flags: FlagSet,
    /// Flags that took their declared default
    pub defaulted: Vec<&'static str>,
}

/// Validates raw answers against a flag catalog and rule set
#[derive(Debug, Clone, Copy)]
pub struct AnswerResolver<'a> {
    catalog: &'a [FlagSpec],
    rules: &'a [CompatibilityRule],
}

impl<'a> AnswerResolver<'a> {
    pub fn new(catalog: &'a [FlagSpec], rules: &'a [CompatibilityRule]) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &'a [FlagSpec] {
        self.catalog
    }

    pub fn rules(&self) -> &'a [CompatibilityRule] {
        self.rules
    }

    /// Resolve raw answers into a complete flag set
    ///
    /// Keys starting with `_` are answer-file metadata and are skipped.
    /// A `null` value counts as omitted.
    pub fn resolve(&self, raw: &RawAnswers) -> Result<Resolution, ValidationErrors> {
        let mut errors = Vec::new();

        for key in raw.keys() {
            if !key.starts_with('_') && !self.catalog.iter().any(|spec| spec.name == key) {
                errors.push(ValidationError::UnknownFlag { flag: key.clone() });
            }
        }

        let mut flags = FlagSet::new();
        let mut defaulted = Vec::new();

        // Derived defaults read other flags, so they go second.
        let (derived, direct): (Vec<&FlagSpec>, Vec<&FlagSpec>) = self
            .catalog
            .iter()
            .partition(|spec| matches!(spec.default, FlagDefault::SlugOf(_)));

        for spec in direct.into_iter().chain(derived) {
            match raw.get(spec.name).filter(|v| !v.is_null()) {
                Some(value) => match coerce(spec, value) {
                    Ok(resolved) => flags.insert(spec.name, resolved),
                    Err(mut bad) => errors.append(&mut bad),
                },
                None => match default_value(spec, &flags) {
                    Ok(resolved) => {
                        tracing::debug!(flag = spec.name, value = %resolved, "using default");
                        defaulted.push(spec.name);
                        flags.insert(spec.name, resolved);
                    }
                    Err(err) => errors.push(err),
                },
            }
        }

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        let violations = self.check_rules(&flags);
        if !violations.is_empty() {
            return Err(ValidationErrors::new(violations));
        }

        tracing::debug!(
            flags = flags.len(),
            defaulted = defaulted.len(),
            "answers resolved"
        );
        Ok(Resolution { flags, defaulted })
    }

    /// Evaluate every compatibility rule against a complete flag set
    pub fn check_rules(&self, flags: &FlagSet) -> Vec<ValidationError> {
        let mut violations = Vec::new();
        for rule in self.rules {
            let flag_names: Vec<String> = rule.flags().iter().map(|f| f.to_string()).collect();
            match rule.is_violated(flags) {
                Ok(false) => {}
                Ok(true) => {
                    tracing::info!(rule = rule.id, "compatibility rule violated");
                    violations.push(ValidationError::Incompatible {
                        rule: rule.id.to_string(),
                        flags: flag_names,
                        message: rule.message.to_string(),
                    });
                }
                Err(err) => {
                    tracing::error!(rule = rule.id, error = %err, "compatibility rule is broken");
                    violations.push(ValidationError::Incompatible {
                        rule: rule.id.to_string(),
                        flags: flag_names,
                        message: format!("rule cannot be evaluated: {}", err),
                    });
                }
            }
        }
        violations
    }
}

fn default_value(spec: &FlagSpec, resolved: &FlagSet) -> Result<FlagValue, ValidationError> {
    let value = match spec.default {
        FlagDefault::Bool(b) => FlagValue::Bool(b),
        FlagDefault::Text(s) => FlagValue::Text(s.to_string()),
        FlagDefault::List(items) => FlagValue::List(items.iter().map(|s| s.to_string()).collect()),
        FlagDefault::SlugOf(source) => {
            let text = resolved.text(source).unwrap_or_default();
            let slug = crate::domain::entities::slugify(text);
            if let FlagKind::Text(rule) = spec.kind {
                if !rule.check(&slug) {
                    return Err(ValidationError::InvalidValue {
                        flag: spec.name.to_string(),
                        value: format!("{:?} (derived from {})", slug, source),
                        expected: spec.expected(),
                    });
                }
            }
            FlagValue::Text(slug)
        }
    };
    Ok(value)
}

fn coerce(spec: &FlagSpec, value: &Value) -> Result<FlagValue, Vec<ValidationError>> {
    let invalid = |shown: String| {
        vec![ValidationError::InvalidValue {
            flag: spec.name.to_string(),
            value: shown,
            expected: spec.expected(),
        }]
    };

    match spec.kind {
        FlagKind::Bool => coerce_bool(value)
            .map(FlagValue::Bool)
            .ok_or_else(|| invalid(value.to_string())),
        FlagKind::Choice(domain) => {
            let text = scalar_text(value).ok_or_else(|| invalid(value.to_string()))?;
            if domain.contains(&text.as_str()) {
                Ok(FlagValue::Text(text))
            } else {
                Err(invalid(value.to_string()))
            }
        }
        FlagKind::Text(rule) => {
            let text = scalar_text(value).ok_or_else(|| invalid(value.to_string()))?;
            if rule.check(&text) {
                Ok(FlagValue::Text(text))
            } else {
                Err(invalid(value.to_string()))
            }
        }
        FlagKind::MultiChoice(domain) => {
            let items: Vec<String> = match value {
                Value::Array(items) => {
                    let mut out = Vec::with_capacity(items.len());
                    for item in items {
                        out.push(scalar_text(item).ok_or_else(|| invalid(item.to_string()))?);
                    }
                    out
                }
                Value::String(s) => s
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
                other => return Err(invalid(other.to_string())),
            };

            let unknown: Vec<ValidationError> = items
                .iter()
                .filter(|item| !domain.contains(&item.as_str()))
                .map(|item| ValidationError::InvalidValue {
                    flag: spec.name.to_string(),
                    value: Value::String(item.clone()).to_string(),
                    expected: spec.expected(),
                })
                .collect();
            if !unknown.is_empty() {
                return Err(unknown);
            }

            // Domain order, duplicates dropped.
            Ok(FlagValue::List(
                domain
                    .iter()
                    .filter(|d| items.iter().any(|i| i == *d))
                    .map(|d| d.to_string())
                    .collect(),
            ))
        }
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Strings as-is, numbers by their shortest decimal form (`3.12`, `6.0`)
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
