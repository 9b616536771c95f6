//! Generate Result

use std::path::PathBuf;

use crate::domain::entities::FlagSet;
use crate::domain::value_objects::ContentHash;

/// Result of a generate operation
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub destination: PathBuf,
    /// Resolved answers the project was rendered from
    pub flags: FlagSet,
    /// Flags that fell back to their declared default
    pub defaulted: Vec<&'static str>,
    /// Relative paths of every generated file, in tree order
    pub files: Vec<String>,
    pub dir_count: usize,
    /// Files that passed syntax validation
    pub validated: usize,
    /// Digest over the whole rendered tree
    pub digest: ContentHash,
    pub dry_run: bool,
    /// An existing destination was replaced
    pub replaced: bool,
}

impl GenerateResult {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn was_written(&self) -> bool {
        !self.dry_run
    }
}
