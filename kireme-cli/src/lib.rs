//! kireme CLI library
//!
//! This library provides the command-line interface for the kireme
//! phrase boundary detector.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
