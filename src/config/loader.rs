//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KeelError, KeelResult};

use super::types::{Config, Verbosity};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> KeelResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| KeelError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| KeelError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `<config dir>/keel/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keel").join("config.toml"))
}

pub fn discover(explicit: Option<&Path>) -> KeelResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config, env_var), warnings));
    }

    if let Some(path) = default_config_path() {
        if path.is_file() {
            let (config, warnings) = load_with_warnings(&path)?;
            tracing::debug!(path = %path.display(), "loaded user config");
            return Ok((with_env_overrides(config, env_var), warnings));
        }
    }

    Ok((with_env_overrides(Config::default(), env_var), Vec::new()))
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply environment variable overrides (KEEL_* prefix)
pub fn with_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // KEEL_VERBOSITY
    if let Some(verbosity) = lookup("KEEL_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // KEEL_VALIDATE_SYNTAX
    if let Some(val) = lookup("KEEL_VALIDATE_SYNTAX") {
        config.render.validate_syntax = val.to_lowercase() != "false" && val != "0";
    }

    // KEEL_ANSWERS_FILE
    if let Some(name) = lookup("KEEL_ANSWERS_FILE") {
        if !name.trim().is_empty() {
            config.render.answers_file = name;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "defaults",
        "render",
        "validate_syntax",
        "answers_file",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
