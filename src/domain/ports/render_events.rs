//! Render Event Port
//!
//! Observable progress for `keel new`: console output, NDJSON event
//! streams, or nothing at all.

use std::path::PathBuf;

/// Event emitted while generating a project
#[derive(Debug, Clone)]
pub enum RenderEvent {
    /// Generation started
    Started { destination: PathBuf },

    /// Answers resolved into a complete flag set
    Resolved {
        flag_count: usize,
        defaulted_count: usize,
    },

    /// A template node was left out, with everything below it
    NodeExcluded { path: String },

    /// Template tree rendered in memory
    Rendered {
        file_count: usize,
        dir_count: usize,
        digest: String,
    },

    /// File written into the staging directory
    FileWritten { index: usize, path: String },

    /// Generation finished
    Completed {
        destination: PathBuf,
        file_count: usize,
        dry_run: bool,
    },
}

/// Trait for receiving render events
///
/// Implementations can be:
/// - ConsoleEventSink: summary lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait RenderEventSink: Send + Sync {
    /// Handle a render event
    fn on_event(&self, event: RenderEvent);

    /// Check if this sink wants per-node and per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RenderEventSink for NoopEventSink {
    fn on_event(&self, _event: RenderEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
