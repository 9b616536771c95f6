//! RenderedArtifact entity - the in-memory output of one render
//!
//! Nothing here has touched the file system yet; materialization writes the
//! artifact out in one step.

use std::collections::BTreeMap;

use crate::domain::value_objects::ContentHash;

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    content: String,
    executable: bool,
}

impl RenderedFile {
    pub fn new(content: impl Into<String>, executable: bool) -> Self {
        Self {
            content: content.into(),
            executable,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_executable(&self) -> bool {
        self.executable
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }
}

/// One entry of the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedEntry {
    Dir,
    File(RenderedFile),
}

/// Output tree keyed by relative `/`-separated path
///
/// Paths sort lexically, so a parent directory always precedes its
/// contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedArtifact {
    entries: BTreeMap<String, RenderedEntry>,
}

impl RenderedArtifact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&mut self, path: impl Into<String>) {
        self.entries.insert(path.into(), RenderedEntry::Dir);
    }

    /// Add a file; returns false if the path is already taken
    pub fn add_file(&mut self, path: impl Into<String>, file: RenderedFile) -> bool {
        let path = path.into();
        if self.entries.contains_key(&path) {
            return false;
        }
        self.entries.insert(path, RenderedEntry::File(file));
        true
    }

    pub fn get(&self, path: &str) -> Option<&RenderedEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// File at `path`, if the path is a file
    pub fn file(&self, path: &str) -> Option<&RenderedFile> {
        match self.entries.get(path) {
            Some(RenderedEntry::File(file)) => Some(file),
            _ => None,
        }
    }

    /// Every entry in path order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RenderedEntry)> {
        self.entries.iter().map(|(p, e)| (p.as_str(), e))
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &RenderedFile)> {
        self.entries.iter().filter_map(|(p, e)| match e {
            RenderedEntry::File(file) => Some((p.as_str(), file)),
            RenderedEntry::Dir => None,
        })
    }

    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(p, e)| match e {
            RenderedEntry::Dir => Some(p.as_str()),
            RenderedEntry::File(_) => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digest over every path, kind, executable bit and file body
    pub fn digest(&self) -> ContentHash {
        ContentHash::from_entries(self.entries.iter().map(|(path, entry)| match entry {
            RenderedEntry::Dir => (path.as_str(), "dir", &b""[..]),
            RenderedEntry::File(file) => (
                path.as_str(),
                if file.executable { "file+x" } else { "file" },
                file.content.as_bytes(),
            ),
        }))
    }
}
