//! Generate Module
//!
//! Orchestrates `keel new`.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`GenerateOptions`)
//! - `result` - Result types (`GenerateResult`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use keel::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(LocalFs::new());
//! let result = use_case.execute(&answers, &GenerateOptions::new("shop"), &events)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;
