//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod render_context;
pub mod render_events;

pub use file_system::{FileSystem, FsError, FsResult};
pub use render_context::{ContextProvider, FlagsOnly};
pub use render_events::{NoopEventSink, RenderEvent, RenderEventSink};
