//! Testing infrastructure for noya integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution helpers
//! - `assertions`: checks over the JSON view models the CLI prints
//! - `process`: background process management for `watch` commands

pub mod assertions;
pub mod process;
pub mod world;

pub use world::{CliResult, TestWorld};
