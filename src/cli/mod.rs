//! CLI module
//!
//! Command-line interface for decoding and printing records.
//!
//! # Commands
//!
//! - `demo` - Decode and print the built-in sample documents
//! - `decode` - Decode documents of one kind from a file or inline JSON
//! - `batch` - Decode tagged documents, each by its own kind
//! - `config` - Show the resolved application config

mod commands;
mod runner;

pub use commands::{Cli, Commands, InputArgs};
pub use runner::Runner;
