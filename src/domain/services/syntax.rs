//! Output validation for rendered files
//!
//! Every rendered file whose extension maps to a known language is checked
//! before anything is written:
//! - Python: tree-sitter parse, plus the indentation rules the grammar is
//!   lenient about (empty blocks, inconsistent dedents, tabs)
//! - TypeScript, TSX, JavaScript: tree-sitter parse
//! - TOML, YAML (every document), JSON: full parse

use std::fmt;

use serde::Deserialize;
use tree_sitter::{Node, Parser, Tree};

use crate::domain::entities::RenderedArtifact;
use crate::error::RenderError;

/// Languages the validator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    TypeScript,
    Tsx,
    JavaScript,
    Toml,
    Yaml,
    Json,
}

impl Language {
    /// Language of a path, by extension
    pub fn of(path: &str) -> Option<Self> {
        let name = path.rsplit('/').next().unwrap_or(path);
        let (_, ext) = name.rsplit_once('.')?;
        match ext {
            "py" => Some(Language::Python),
            "ts" | "mts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "toml" => Some(Language::Toml),
            "yml" | "yaml" => Some(Language::Yaml),
            "json" => Some(Language::Json),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::TypeScript => "TypeScript",
            Language::Tsx => "TSX",
            Language::JavaScript => "JavaScript",
            Language::Toml => "TOML",
            Language::Yaml => "YAML",
            Language::Json => "JSON",
        }
    }

    /// Check `content`; the error text names the offending line where known
    pub fn check(&self, content: &str) -> Result<(), String> {
        match self {
            Language::Python => check_python(content),
            Language::TypeScript => {
                parse_clean(content, tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()).map(drop)
            }
            // JSX is legal in plain JavaScript files, so they share the TSX grammar
            Language::Tsx | Language::JavaScript => {
                parse_clean(content, tree_sitter_typescript::LANGUAGE_TSX.into()).map(drop)
            }
            Language::Toml => toml::from_str::<toml::Table>(content)
                .map(|_| ())
                .map_err(|e| e.to_string()),
            Language::Yaml => {
                for document in serde_yaml_ng::Deserializer::from_str(content) {
                    serde_yaml_ng::Value::deserialize(document).map_err(|e| e.to_string())?;
                }
                Ok(())
            }
            Language::Json => serde_json::from_str::<serde_json::Value>(content)
                .map(|_| ())
                .map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validates rendered files before materialization
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputValidator;

impl OutputValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check one file
    pub fn validate_file(&self, path: &str, content: &str) -> Result<bool, RenderError> {
        let Some(language) = Language::of(path) else {
            return Ok(false);
        };
        language
            .check(content)
            .map_err(|message| RenderError::InvalidOutput {
                path: path.to_string(),
                language: language.name(),
                message,
            })?;
        Ok(true)
    }

    /// Check every file of an artifact; returns how many were checked
    pub fn validate(&self, artifact: &RenderedArtifact) -> Result<usize, RenderError> {
        let mut checked = 0;
        for (path, file) in artifact.files() {
            if self.validate_file(path, file.content())? {
                tracing::trace!(path, "syntax ok");
                checked += 1;
            }
        }
        tracing::debug!(checked, "generated files validated");
        Ok(checked)
    }
}

/// Parse `source` and fail on the first error or missing node
fn parse_clean(source: &str, grammar: tree_sitter::Language) -> Result<Tree, String> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar)
        .map_err(|e| format!("cannot load grammar: {}", e))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| "parser produced no tree".to_string())?;

    let root = tree.root_node();
    if root.has_error() {
        let node = first_error(root).unwrap_or(root);
        let at = node.start_position();
        return Err(if node.is_missing() {
            format!("line {}: missing '{}'", at.row + 1, node.kind())
        } else {
            format!("line {}, column {}: invalid syntax", at.row + 1, at.column + 1)
        });
    }
    Ok(tree)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found.or(Some(node))
}

/// Check a Python module
pub fn check_python(source: &str) -> Result<(), String> {
    let tree = parse_clean(source, tree_sitter_python::LANGUAGE.into())?;
    let root = tree.root_node();
    check_tabs(root, source)?;
    check_blocks(root, source)
}

fn check_tabs(root: Node<'_>, source: &str) -> Result<(), String> {
    let mut offset = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        if let Some(tab) = line[..indent].find('\t') {
            let at = offset + tab;
            let in_string = root
                .descendant_for_byte_range(at, at)
                .is_some_and(|node| node.kind().starts_with("string"));
            if !in_string {
                return Err(format!("line {}: tab in indentation", index + 1));
            }
        }
        offset += line.len();
    }
    Ok(())
}

/// Statements of one suite start at one column, and no suite is empty
fn check_blocks(node: Node<'_>, source: &str) -> Result<(), String> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();

    if matches!(node.kind(), "module" | "block") {
        let statements: Vec<Node<'_>> = children
            .iter()
            .copied()
            .filter(|child| child.kind() != "comment")
            .collect();

        if node.kind() == "block" && statements.is_empty() {
            return Err(format!(
                "line {}: expected an indented block",
                node.start_position().row + 1
            ));
        }

        let mut column = (node.kind() == "module").then_some(0);
        for statement in statements.iter().filter(|s| starts_line(source, s)) {
            let at = statement.start_position();
            match column {
                None => column = Some(at.column),
                Some(expected) if at.column > expected => {
                    return Err(format!("line {}: unexpected indent", at.row + 1));
                }
                Some(expected) if at.column < expected => {
                    return Err(format!(
                        "line {}: unindent does not match any outer indentation level",
                        at.row + 1
                    ));
                }
                Some(_) => {}
            }
        }
    }

    for child in children {
        check_blocks(child, source)?;
    }
    Ok(())
}

fn starts_line(source: &str, node: &Node<'_>) -> bool {
    let start = node.start_byte();
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    source[line_start..start]
        .chars()
        .all(|c| c == ' ' || c == '\t')
}
