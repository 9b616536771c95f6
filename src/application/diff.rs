//! Diff Use Case
//!
//! Orchestrates the diff flow:
//! 1. Resolve answers and render the tree in memory
//! 2. List the files already under the destination
//! 3. Classify every path as new, modified, unchanged or extra
//!
//! This is a read-only preview of `keel new --force`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::application::pipeline::ProjectPipeline;
use crate::domain::ports::{FileSystem, NoopEventSink};
use crate::domain::services::{Differ, RawAnswers};
use crate::domain::value_objects::ContentHash;
use crate::error::{KeelResult, RenderError};

/// Directories under the destination that are never reported as extra
const IGNORED_DIRS: &[&str] = &[".git", ".venv", "node_modules", "__pycache__"];

/// Options for the diff operation
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Existing project to compare against
    pub destination: PathBuf,
    /// Include unified diffs for modified files
    pub patch: bool,
    pub validate_syntax: bool,
    pub answers_file: Option<String>,
}

impl DiffOptions {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            patch: false,
            validate_syntax: true,
            answers_file: Some(".keel-answers.yml".to_string()),
        }
    }

    pub fn with_patch(mut self, patch: bool) -> Self {
        self.patch = patch;
        self
    }

    pub fn with_validation(mut self, validate_syntax: bool) -> Self {
        self.validate_syntax = validate_syntax;
        self
    }

    pub fn with_answers_file(mut self, name: Option<String>) -> Self {
        self.answers_file = name;
        self
    }
}

/// Type of change for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeType {
    /// Rendered, not on disk
    New,
    /// On disk with different content
    Modified,
    /// On disk with identical content
    Unchanged,
    /// On disk, not rendered
    Extra,
}

impl ChangeType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeType::New => "new",
            ChangeType::Modified => "modified",
            ChangeType::Unchanged => "unchanged",
            ChangeType::Extra => "extra",
        }
    }
}

/// One compared path
#[derive(Debug, Clone)]
pub struct DiffEntry {
    /// Relative `/`-separated path
    pub path: String,
    pub change: ChangeType,
    /// Unified diff, for modified files when requested
    pub patch: Option<String>,
}

/// Result of the diff operation
#[derive(Debug, Clone)]
pub struct DiffResult {
    /// Every compared path, sorted
    pub entries: Vec<DiffEntry>,
    pub digest: ContentHash,
}

impl DiffResult {
    pub fn count(&self, change: ChangeType) -> usize {
        self.entries.iter().filter(|e| e.change == change).count()
    }

    /// Entries other than unchanged files
    pub fn changes(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries
            .iter()
            .filter(|e| e.change != ChangeType::Unchanged)
    }

    /// True if regenerating would alter the destination
    pub fn has_changes(&self) -> bool {
        self.changes().next().is_some()
    }
}

/// Diff Use Case
pub struct DiffUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> DiffUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Execute the diff operation
    ///
    /// Returns what would change without making any modifications.
    pub fn execute(&self, raw: &RawAnswers, options: &DiffOptions) -> KeelResult<DiffResult> {
        let prepared = ProjectPipeline::new()
            .with_validation(options.validate_syntax)
            .with_answers_file(options.answers_file.clone())
            .run(raw, &NoopEventSink)?;

        let on_disk = self.existing_files(&options.destination)?;
        let differ = Differ::new();
        let mut entries = Vec::new();

        for (path, file) in prepared.artifact.files() {
            if !on_disk.contains(path) {
                entries.push(DiffEntry {
                    path: path.to_string(),
                    change: ChangeType::New,
                    patch: None,
                });
                continue;
            }

            let full = options.destination.join(path);
            let entry = match self.file_system.read(&full) {
                Ok(current) if current == file.content() => DiffEntry {
                    path: path.to_string(),
                    change: ChangeType::Unchanged,
                    patch: None,
                },
                Ok(current) => DiffEntry {
                    path: path.to_string(),
                    change: ChangeType::Modified,
                    patch: options
                        .patch
                        .then(|| differ.unified(path, &current, file.content())),
                },
                Err(err) => {
                    tracing::warn!(path = %full.display(), error = %err, "cannot read existing file");
                    DiffEntry {
                        path: path.to_string(),
                        change: ChangeType::Modified,
                        patch: None,
                    }
                }
            };
            entries.push(entry);
        }

        for path in &on_disk {
            if !prepared.artifact.contains(path) {
                entries.push(DiffEntry {
                    path: path.clone(),
                    change: ChangeType::Extra,
                    patch: None,
                });
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!(entries = entries.len(), "diff computed");

        Ok(DiffResult {
            entries,
            digest: prepared.artifact.digest(),
        })
    }

    fn existing_files(&self, destination: &Path) -> KeelResult<BTreeSet<String>> {
        if !self.file_system.exists(destination) {
            return Ok(BTreeSet::new());
        }
        if !self.file_system.is_dir(destination) {
            return Err(RenderError::DestinationNotDirectory {
                path: destination.to_path_buf(),
            }
            .into());
        }
        let files = self
            .file_system
            .list_files(destination)
            .map_err(|e| RenderError::Write {
                path: destination.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(files.into_iter().filter(|p| !is_ignored(p)).collect())
    }
}

fn is_ignored(path: &str) -> bool {
    path.split('/')
        .any(|segment| IGNORED_DIRS.contains(&segment))
}
