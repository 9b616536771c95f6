//! Event Sink Implementations
//!
//! Provides concrete implementations of RenderEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable progress

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
