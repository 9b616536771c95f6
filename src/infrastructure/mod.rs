//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (LocalFs)
//! - `events/` - Render event sinks (console, NDJSON)
//! - `answers` - Answers files and `--set` overrides

pub mod answers;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
