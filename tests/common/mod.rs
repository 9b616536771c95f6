//! Common test utilities for Keel contract, property and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment (work dir + config dir) for CLI runs
//! - `render`: In-memory rendering from string answers
//! - Assertion macros: `assert_generated!`, `assert_not_generated!`

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod env;
pub mod render;

pub use assertions::*;
pub use env::*;
pub use render::*;
