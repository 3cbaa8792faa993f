//! dto-visit CLI
//!
//! Command-line interface for decoding and printing records

use clap::Parser;
use dto_visit::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let runner = match Runner::new(cli) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging; RUST_LOG overrides the configured level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(runner.log_level().into())
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = runner.run(std::io::stdout().lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
