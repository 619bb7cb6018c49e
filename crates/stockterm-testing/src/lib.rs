//! Testing infrastructure for stockterm integration tests.
//!
//! - `TestWorld`: isolated workspace plus a runner for the built binary
//! - `fixtures`: snapshot export documents
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
