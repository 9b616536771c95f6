//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports) and the blueprint
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Resolve, render, validate and write a project
//! - `CheckUseCase` - Resolve and render without writing
//! - `DiffUseCase` - Compare a fresh render with an existing tree
//!
//! ## Services
//!
//! - `ProjectPipeline` - The in-memory steps shared by every use case
//! - `Materializer` - Staged, all-or-nothing writes

pub mod check;
pub mod diff;
pub mod generate;
pub mod materialize;
pub mod pipeline;

pub use check::{CheckOptions, CheckResult, CheckUseCase, RenderSummary};
pub use diff::{ChangeType, DiffEntry, DiffOptions, DiffResult, DiffUseCase};
pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use materialize::{DestinationState, Materialized, Materializer};
pub use pipeline::{PreparedProject, ProjectPipeline};
