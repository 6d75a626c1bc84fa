//! `mdsplice` update run.

use std::path::PathBuf;

use clap::Args;
use mdsplice_config::{CliSettings, Config};
use mdsplice_engine::{FileProcessor, ProcessorConfig, Walker};

use crate::error::CliError;
use crate::output::{Output, Summary};

/// Arguments for an update run.
#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// Directory to search for markdown files (overrides config, default: current directory).
    root: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdsplice.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report stale files without rewriting them; exit with status 1 if any.
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output (log each directive and rewritten file).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Whether any file was stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    /// Nothing changed, or changes were written.
    Clean,
    /// `--check` found files that would change.
    Stale,
}

impl UpdateArgs {
    /// Walk the tree and regenerate every directive block.
    ///
    /// # Errors
    ///
    /// Returns an error on the first configuration, walk, or processing
    /// failure. Files processed before the failure keep their new content.
    pub(crate) fn execute(self, output: &Output) -> Result<Status, CliError> {
        let cli_settings = CliSettings { root: self.root };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let mut processor_config = ProcessorConfig::new().with_dry_run(self.check);
        if let Some(path) = &config.documentation_path {
            processor_config = processor_config.with_documentation_path(path);
        }
        let processor = FileProcessor::with_config(processor_config);

        let scan = &config.scan_resolved;
        tracing::info!(
            config = ?config.config_path,
            root = %scan.root.display(),
            extension = %scan.extension,
            check = self.check,
            "Scanning for directives"
        );

        let mut summary = Summary::default();
        for path in Walker::new(&scan.root, scan.extension.as_str()) {
            let report = processor.process_file(&path?)?;
            output.file(&report, self.check);
            summary.record(report.outcome);
        }
        output.summary(&summary, self.check);

        if self.check && summary.changed > 0 {
            Ok(Status::Stale)
        } else {
            Ok(Status::Clean)
        }
    }
}
