//! Command-line interface for the gateway binary.

pub mod config_merger;
pub mod parser;
pub mod validation;

pub use parser::{Cli, Commands};
