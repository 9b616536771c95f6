//! Terminal and CI presentation for the `keel` binary

pub mod ci;
pub mod error;
pub mod json;
pub mod terminal;
