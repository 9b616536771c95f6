//! Configuration module for Keel
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (KEEL_*)
//! 3. Config file (`--config`, else `<config dir>/keel/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_config_path, ConfigWarning};
pub use types::{Config, OutputConfig, RenderConfig, Verbosity};
