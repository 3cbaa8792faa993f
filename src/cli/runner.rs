//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, InputArgs};
use crate::config::{find_config, load_config, parent_config_path, AppConfig};
use crate::decode::{decode_as, decode_tagged, extract_documents, parse_document, parse_tagged};
use crate::display::write_records;
use crate::error::{Error, Result, ResultExt};
use crate::records::{Record, RecordKind};
use crate::samples::demo_documents;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: AppConfig,
    config_path: Option<PathBuf>,
    work_dir: PathBuf,
}

impl Runner {
    /// Create a new runner, resolving the application config
    ///
    /// An explicit `--config` must exist. Otherwise `config.json` is looked
    /// up in the working directory and its parent, falling back to defaults.
    pub fn new(cli: Cli) -> Result<Self> {
        Self::with_work_dir(cli, std::env::current_dir()?)
    }

    /// Like [`Runner::new`], resolving relative lookups against `work_dir`
    pub fn with_work_dir(cli: Cli, work_dir: impl AsRef<Path>) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();
        let config_path = match &cli.config {
            Some(path) => Some(path.clone()),
            None => find_config(&work_dir),
        };

        let config = match &config_path {
            Some(path) => load_config(path)?,
            None => AppConfig::default(),
        };

        Ok(Self {
            cli,
            config,
            config_path,
            work_dir,
        })
    }

    /// Log level to run at: `--verbose` wins over the config file
    pub fn log_level(&self) -> Level {
        if self.cli.verbose {
            return Level::DEBUG;
        }
        self.config.level().unwrap_or(Level::INFO)
    }

    /// Run the CLI command, writing records to `out`
    pub fn run<W: Write>(&self, out: W) -> Result<()> {
        match &self.cli.command {
            Commands::Demo => self.demo(out),
            Commands::Decode {
                kind,
                input,
                record_path,
                keep_going,
            } => self.decode(out, *kind, input, record_path.as_deref(), *keep_going),
            Commands::Batch { input, keep_going } => self.batch(out, input, *keep_going),
            Commands::Config => self.show_config(out),
        }
    }

    /// Read input text from a file or the inline flag
    fn load_input(&self, input: &InputArgs) -> Result<String> {
        if let Some(json_str) = &input.json {
            return Ok(json_str.clone());
        }

        let path = input
            .input
            .as_ref()
            .ok_or_else(|| Error::config("No input given (use --input or --json)"))?;

        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
    }

    /// Decode the built-in samples
    fn demo<W: Write>(&self, out: W) -> Result<()> {
        let records = demo_documents()?
            .iter()
            .map(decode_tagged)
            .collect::<Result<Vec<_>>>()?;

        write_records(out, &records, self.cli.format)
    }

    /// Decode every extracted document as `kind`
    fn decode<W: Write>(
        &self,
        out: W,
        kind: RecordKind,
        input: &InputArgs,
        record_path: Option<&str>,
        keep_going: bool,
    ) -> Result<()> {
        let value = parse_document(&self.load_input(input)?)?;
        let documents = extract_documents(&value, record_path)?;
        debug!(%kind, documents = documents.len(), "Extracted documents");

        let records = collect_records(
            documents.iter().map(|doc| decode_as(kind, doc)),
            keep_going,
        )?;

        info!(%kind, decoded = records.len(), total = documents.len(), "Decoded documents");
        write_records(out, &records, self.cli.format)
    }

    /// Decode tagged documents, each by its own kind
    fn batch<W: Write>(&self, out: W, input: &InputArgs, keep_going: bool) -> Result<()> {
        let tagged = parse_tagged(&self.load_input(input)?)?;

        let records = collect_records(tagged.iter().map(decode_tagged), keep_going)?;

        info!(decoded = records.len(), total = tagged.len(), "Decoded batch");
        write_records(out, &records, self.cli.format)
    }

    /// Report the parent-directory config.json and the resolved config
    fn show_config<W: Write>(&self, mut out: W) -> Result<()> {
        match parent_config_path(&self.work_dir) {
            Some(path) if path.is_file() => writeln!(out, "File exists: {}", path.display())?,
            Some(path) => writeln!(out, "File does NOT exist: {}", path.display())?,
            None => writeln!(out, "File does NOT exist: no parent directory")?,
        }

        match &self.config_path {
            Some(path) => writeln!(out, "Config file: {}", path.display())?,
            None => writeln!(out, "Config file: none (using defaults)")?,
        }

        let endpoint = &self.config.endpoint;
        writeln!(out, "Endpoint type: {}", endpoint.endpoint_type)?;
        writeln!(out, "URL: {}", endpoint.url)?;
        writeln!(out, "Model: {}", endpoint.model)?;
        writeln!(out, "Log level: {}", self.config.log_level)?;
        out.flush()?;
        Ok(())
    }
}

/// Collect decode results in order.
///
/// Failures are wrapped with the document index. With `keep_going`, decode
/// failures are logged and skipped; anything else still aborts.
fn collect_records(
    results: impl Iterator<Item = Result<Record>>,
    keep_going: bool,
) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, result) in results.enumerate() {
        match result.map_err(|e| Error::document(index, e)) {
            Ok(record) => records.push(record),
            Err(e) if keep_going && e.is_decode_error() => {
                warn!(error = %e, "Skipping document");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(records)
}
