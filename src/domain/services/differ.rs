//! Differ Domain Service
//!
//! Unified patches between a file already on disk and its freshly rendered
//! version, for `keel diff --patch`.

use similar::TextDiff;

/// Lines of context around each hunk
const CONTEXT_LINES: usize = 3;

/// Builds unified patches for modified files
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Unified diff with `a/` and `b/` headers; empty when nothing changed
    pub fn unified(&self, path: &str, old: &str, new: &str) -> String {
        TextDiff::from_lines(old, new)
            .unified_diff()
            .context_radius(CONTEXT_LINES)
            .header(&format!("a/{}", path), &format!("b/{}", path))
            .to_string()
    }
}
