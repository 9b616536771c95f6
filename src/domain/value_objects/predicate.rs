//! Predicate value object - boolean expressions over a FlagSet
//!
//! Predicates are plain data so that inclusion rules and compatibility
//! rules can live in `const` tables:
//!
//! ```
//! use keel::domain::value_objects::Predicate;
//!
//! const CELERY_ON_DJANGO_6: Predicate = Predicate::All(&[
//!     Predicate::Equals("background_tasks", "celery"),
//!     Predicate::Equals("django_version", "6.0"),
//! ]);
//! assert_eq!(
//!     CELERY_ON_DJANGO_6.to_string(),
//!     r#"background_tasks == "celery" && django_version == "6.0""#
//! );
//! ```

use std::fmt;

use crate::domain::entities::FlagSet;
use crate::domain::value_objects::FlagValue;

/// Error raised when a predicate cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateError {
    /// Predicate names a flag the set does not contain
    UndeclaredFlag(String),
    /// Operator applied to the wrong kind of value
    KindMismatch {
        flag: String,
        operator: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateError::UndeclaredFlag(flag) => write!(f, "undeclared flag '{}'", flag),
            PredicateError::KindMismatch {
                flag,
                operator,
                found,
            } => write!(f, "'{}' cannot be applied to {} flag '{}'", operator, found, flag),
        }
    }
}

impl std::error::Error for PredicateError {}

/// Boolean expression over resolved flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Always true
    Always,
    /// Boolean flag is set
    IsTrue(&'static str),
    /// Choice or text flag equals the value
    Equals(&'static str, &'static str),
    /// Choice or text flag is one of the values
    OneOf(&'static str, &'static [&'static str]),
    /// Multi-select flag contains the value
    Contains(&'static str, &'static str),
    /// Multi-select flag has at least one entry
    NotEmpty(&'static str),
    Not(&'static Predicate),
    All(&'static [Predicate]),
    Any(&'static [Predicate]),
}

impl Predicate {
    /// Evaluate against a resolved flag set
    pub fn eval(&self, flags: &FlagSet) -> Result<bool, PredicateError> {
        match self {
            Predicate::Always => Ok(true),
            Predicate::IsTrue(name) => match lookup(flags, name)? {
                FlagValue::Bool(b) => Ok(*b),
                other => Err(mismatch(name, "is true", other)),
            },
            Predicate::Equals(name, expected) => match lookup(flags, name)? {
                FlagValue::Text(s) => Ok(s == expected),
                other => Err(mismatch(name, "==", other)),
            },
            Predicate::OneOf(name, values) => match lookup(flags, name)? {
                FlagValue::Text(s) => Ok(values.iter().any(|v| v == s)),
                other => Err(mismatch(name, "in", other)),
            },
            Predicate::Contains(name, value) => match lookup(flags, name)? {
                FlagValue::List(items) => Ok(items.iter().any(|i| i == value)),
                other => Err(mismatch(name, "contains", other)),
            },
            Predicate::NotEmpty(name) => match lookup(flags, name)? {
                FlagValue::List(items) => Ok(!items.is_empty()),
                other => Err(mismatch(name, "not empty", other)),
            },
            Predicate::Not(inner) => Ok(!inner.eval(flags)?),
            // No short-circuit: every branch is checked so a broken rule
            // surfaces regardless of the other answers.
            Predicate::All(parts) => {
                let mut result = true;
                for part in parts.iter() {
                    result &= part.eval(flags)?;
                }
                Ok(result)
            }
            Predicate::Any(parts) => {
                let mut result = false;
                for part in parts.iter() {
                    result |= part.eval(flags)?;
                }
                Ok(result)
            }
        }
    }

    /// Every flag name this predicate reads, in first-seen order
    pub fn referenced_flags(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_flags(&mut out);
        out
    }

    fn collect_flags(&self, out: &mut Vec<&'static str>) {
        match self {
            Predicate::Always => {}
            Predicate::IsTrue(name)
            | Predicate::Equals(name, _)
            | Predicate::OneOf(name, _)
            | Predicate::Contains(name, _)
            | Predicate::NotEmpty(name) => {
                if !out.contains(name) {
                    out.push(*name);
                }
            }
            Predicate::Not(inner) => inner.collect_flags(out),
            Predicate::All(parts) | Predicate::Any(parts) => {
                for part in parts.iter() {
                    part.collect_flags(out);
                }
            }
        }
    }

    /// Literal values compared against `flag`
    pub fn compared_values(&self, flag: &str) -> Vec<&'static str> {
        match self {
            Predicate::Equals(name, value) | Predicate::Contains(name, value) if *name == flag => {
                vec![*value]
            }
            Predicate::OneOf(name, values) if *name == flag => values.to_vec(),
            Predicate::Not(inner) => inner.compared_values(flag),
            Predicate::All(parts) | Predicate::Any(parts) => parts
                .iter()
                .flat_map(|p| p.compared_values(flag))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn lookup<'a>(flags: &'a FlagSet, name: &str) -> Result<&'a FlagValue, PredicateError> {
    flags
        .get(name)
        .ok_or_else(|| PredicateError::UndeclaredFlag(name.to_string()))
}

fn mismatch(name: &str, operator: &'static str, found: &FlagValue) -> PredicateError {
    PredicateError::KindMismatch {
        flag: name.to_string(),
        operator,
        found: found.kind_name(),
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Always => write!(f, "always"),
            Predicate::IsTrue(name) => write!(f, "{}", name),
            Predicate::Equals(name, value) => write!(f, "{} == \"{}\"", name, value),
            Predicate::OneOf(name, values) => write!(f, "{} in [{}]", name, values.join(", ")),
            Predicate::Contains(name, value) => write!(f, "\"{}\" in {}", value, name),
            Predicate::NotEmpty(name) => write!(f, "{} not empty", name),
            Predicate::Not(inner) => match inner {
                Predicate::All(_) | Predicate::Any(_) => write!(f, "!({})", inner),
                _ => write!(f, "!{}", inner),
            },
            Predicate::All(parts) => write_joined(f, parts, " && "),
            Predicate::Any(parts) => write_joined(f, parts, " || "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Predicate], sep: &str) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        match part {
            Predicate::All(_) | Predicate::Any(_) => write!(f, "({})", part)?,
            _ => write!(f, "{}", part)?,
        }
    }
    Ok(())
}
