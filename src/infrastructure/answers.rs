//! Answers files and `--set` overrides
//!
//! Answers arrive as YAML (the default), TOML or JSON and are read into the
//! same raw map the resolver consumes. Nothing here validates values; that
//! is the resolver's job.

use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::entities::FlagSet;
use crate::domain::ports::FileSystem;
use crate::domain::services::RawAnswers;
use crate::error::{KeelError, KeelResult};

/// Metadata key recording the generator version in an answers file
pub const VERSION_KEY: &str = "_keel_version";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
    Json,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Format::Toml,
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Read an answers file through `fs`
pub fn load(fs: &dyn FileSystem, path: &Path) -> KeelResult<RawAnswers> {
    let content = fs.read(path).map_err(|e| KeelError::AnswersFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse(path, &content)
}

/// Parse answers text; the format follows the file extension
pub fn parse(path: &Path, content: &str) -> KeelResult<RawAnswers> {
    let invalid = |message: String| KeelError::AnswersFile {
        file: path.to_path_buf(),
        message,
    };

    let value: Value = match Format::of(path) {
        Format::Yaml => serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?,
        Format::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
        Format::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(invalid(format!(
            "expected a mapping of flag names to values, found {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// Parse one `KEY=VALUE` override; the value stays a string
pub fn parse_override(raw: &str) -> KeelResult<(String, Value)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| KeelError::InvalidOverride {
        raw: raw.to_string(),
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(KeelError::InvalidOverride {
            raw: raw.to_string(),
        });
    }
    Ok((key.to_string(), Value::String(value.trim().to_string())))
}

/// Layer answer sources; later layers win key by key
pub fn merge<'a, I>(layers: I) -> RawAnswers
where
    I: IntoIterator<Item = &'a RawAnswers>,
{
    let mut merged = RawAnswers::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// YAML record of resolved flags, readable back as an answers file
pub fn render_record(name: &Path, flags: &FlagSet) -> KeelResult<String> {
    let mut record = flags.to_json_map();
    record.insert(
        VERSION_KEY.to_string(),
        Value::String(env!("CARGO_PKG_VERSION").to_string()),
    );
    serde_yaml_ng::to_string(&record).map_err(|e| KeelError::AnswersFile {
        file: name.to_path_buf(),
        message: e.to_string(),
    })
}
