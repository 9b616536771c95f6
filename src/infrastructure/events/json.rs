//! JSON Event Sink
//!
//! Outputs render events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{RenderEvent, RenderEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RenderEventSink for JsonEventSink {
    fn on_event(&self, event: RenderEvent) {
        let json = match event {
            RenderEvent::Started { destination } => serde_json::json!({
                "event": "start",
                "command": self.command,
                "destination": destination.display().to_string(),
            }),

            RenderEvent::Resolved {
                flag_count,
                defaulted_count,
            } => serde_json::json!({
                "event": "resolved",
                "command": self.command,
                "flags": flag_count,
                "defaulted": defaulted_count,
            }),

            RenderEvent::NodeExcluded { path } => serde_json::json!({
                "event": "excluded",
                "command": self.command,
                "path": path,
            }),

            RenderEvent::Rendered {
                file_count,
                dir_count,
                digest,
            } => serde_json::json!({
                "event": "rendered",
                "command": self.command,
                "files": file_count,
                "dirs": dir_count,
                "digest": digest,
            }),

            RenderEvent::FileWritten { index, path } => serde_json::json!({
                "event": "item_written",
                "command": self.command,
                "index": index,
                "path": path,
            }),

            RenderEvent::Completed {
                destination,
                file_count,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "command": self.command,
                "status": "success",
                "destination": destination.display().to_string(),
                "files": file_count,
                "dry_run": dry_run,
            }),
        };

        self.write_event(json);
    }
}
