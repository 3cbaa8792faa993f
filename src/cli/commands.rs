//! CLI commands and argument parsing

use crate::display::OutputFormat;
use crate::records::RecordKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// dto-visit CLI
#[derive(Parser, Debug)]
#[command(name = "dto-visit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Application config file (JSON, or YAML by extension)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode and print the built-in user, product and order samples
    Demo,

    /// Decode documents as one record kind
    Decode {
        /// Record kind to decode as
        #[arg(short, long, value_enum)]
        kind: RecordKind,

        #[command(flatten)]
        input: InputArgs,

        /// Path to the documents inside the input (dot path or JSONPath)
        #[arg(long)]
        record_path: Option<String>,

        /// Skip documents that fail to decode instead of aborting
        #[arg(long)]
        keep_going: bool,
    },

    /// Decode tagged documents ({"kind": ..., "document": {...}})
    Batch {
        #[command(flatten)]
        input: InputArgs,

        /// Skip documents that fail to decode instead of aborting
        #[arg(long)]
        keep_going: bool,
    },

    /// Show the resolved application config
    Config,
}

/// Where to read input JSON from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Input file (JSON)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Inline input JSON
    #[arg(long)]
    pub json: Option<String>,
}
