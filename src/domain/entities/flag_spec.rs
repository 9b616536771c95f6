//! FlagSpec entity - a declared configuration input

use std::fmt;

/// Shape and domain of a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    /// Exactly one of the listed values
    Choice(&'static [&'static str]),
    /// Any subset of the listed values
    MultiChoice(&'static [&'static str]),
    /// Free single-line text checked by a rule
    Text(TextRule),
}

/// Validation rule for text flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
    Any,
    NonEmpty,
    /// Lowercase Python identifier usable as a package name
    PythonIdentifier,
    Email,
}

/// Default used when an answer is omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagDefault {
    Bool(bool),
    Text(&'static str),
    List(&'static [&'static str]),
    /// Slugified from another text flag
    SlugOf(&'static str),
}

/// A declared flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub kind: FlagKind,
    pub default: FlagDefault,
    pub help: &'static str,
}

impl FlagSpec {
    /// Legal values for choice and multi-choice flags
    pub fn domain(&self) -> Option<&'static [&'static str]> {
        match self.kind {
            FlagKind::Choice(values) | FlagKind::MultiChoice(values) => Some(values),
            _ => None,
        }
    }

    /// Human description of what the flag accepts
    pub fn expected(&self) -> String {
        match self.kind {
            FlagKind::Bool => "true or false".to_string(),
            FlagKind::Choice(values) => format!("one of {}", values.join(", ")),
            FlagKind::MultiChoice(values) => {
                format!("a list drawn from {}", values.join(", "))
            }
            FlagKind::Text(rule) => rule.to_string(),
        }
    }
}

impl TextRule {
    /// Check a text value against the rule
    ///
    /// Every rule rejects control characters: text flags end up inside
    /// single-line comments and string literals.
    pub fn check(&self, value: &str) -> bool {
        if value.chars().any(char::is_control) {
            return false;
        }
        match self {
            TextRule::Any => true,
            TextRule::NonEmpty => !value.trim().is_empty(),
            TextRule::PythonIdentifier => is_python_package_name(value),
            TextRule::Email => is_plausible_email(value),
        }
    }
}

impl fmt::Display for TextRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextRule::Any => write!(f, "single-line text"),
            TextRule::NonEmpty => write!(f, "non-empty single-line text"),
            TextRule::PythonIdentifier => write!(
                f,
                "a lowercase Python identifier (letters, digits, underscores; not a keyword)"
            ),
            TextRule::Email => write!(f, "an email address"),
        }
    }
}

const PYTHON_KEYWORDS: &[&str] = &[
    "false", "none", "true", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Names that would shadow the generated project's own packages
const RESERVED_PACKAGES: &[&str] = &["apps", "config", "django", "test", "tests"];

fn is_python_package_name(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_lowercase() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return false;
    }
    !PYTHON_KEYWORDS.contains(&value) && !RESERVED_PACKAGES.contains(&value)
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
        && !value.contains('"')
}

/// Derive a package-name slug from free text
///
/// `"My Shop 2.0"` becomes `"my_shop_2_0"`. The result may still fail
/// [`TextRule::PythonIdentifier`] (e.g. it starts with a digit); the resolver
/// reports that as a validation error on the slug flag.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;
    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}
