//! File processor.
//!
//! Walks the lines of one markdown file, copies each line through, and hands
//! every directive to its generator. The directive line itself is always kept;
//! the generator decides how many of the following lines it replaces.

use std::io;
use std::path::{Path, PathBuf};

use crate::directive::{DirectiveError, parse_line};
use crate::generate::{Command, GenerateError, GeneratorContext, OutputLines, ReadFileFn};

/// Configuration for the file processor.
pub struct ProcessorConfig {
    /// File inserted by the `documentation` command.
    ///
    /// Default: the reference built into the binary
    pub documentation_path: Option<PathBuf>,
    /// Callback to read inserted files.
    ///
    /// Default: `std::fs::read_to_string`
    pub read_file: Option<Box<ReadFileFn>>,
    /// Compute results without rewriting any file.
    pub dry_run: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documentation_path: None,
            read_file: None,
            dry_run: false,
        }
    }

    /// Read the `documentation` content from a file.
    #[must_use]
    pub fn with_documentation_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.documentation_path = Some(path.into());
        self
    }

    /// Set the file reading callback.
    #[must_use]
    pub fn with_read_file<F>(mut self, read_file: F) -> Self
    where
        F: Fn(&Path) -> io::Result<String> + Send + Sync + 'static,
    {
        self.read_file = Some(Box::new(read_file));
        self
    }

    /// Enable or disable dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Default file reading function.
fn default_read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// What processing did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No directives; the file was not touched.
    NoDirectives,
    /// Directives found, regenerated content is identical.
    Unchanged,
    /// Directives found and the content differs. The file was rewritten
    /// unless running in dry-run mode.
    Changed,
}

/// Result of processing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Regenerated text.
    pub text: String,
    /// Directive lines found, trimmed, in order.
    pub directives: Vec<String>,
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// File processed.
    pub path: PathBuf,
    /// Directive lines found, trimmed, in order.
    pub directives: Vec<String>,
    pub outcome: Outcome,
}

/// Error raised while processing a file.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: unknown command `{command}`", path.display())]
    UnknownCommand {
        path: PathBuf,
        line: usize,
        command: String,
    },

    #[error("{}:{line}: {source}", path.display())]
    Directive {
        path: PathBuf,
        line: usize,
        #[source]
        source: DirectiveError,
    },

    #[error("{}:{line}: {source}", path.display())]
    Generate {
        path: PathBuf,
        line: usize,
        #[source]
        source: GenerateError,
    },
}

/// Regenerates directive content in markdown files.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use mdsplice_engine::{FileProcessor, ProcessorConfig};
///
/// let config = ProcessorConfig::new().with_read_file(|_| Ok("echo hi\n".to_owned()));
/// let processor = FileProcessor::with_config(config);
///
/// let input = "<!-- |insert,src=x.sh,syntax=shell -->\n";
/// let processed = processor.process_text(input, Path::new("README.md")).unwrap();
/// assert_eq!(processed.text, "<!-- |insert,src=x.sh,syntax=shell -->\n```shell\necho hi\n```\n");
/// ```
pub struct FileProcessor {
    config: ProcessorConfig,
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProcessor {
    /// Create a processor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    /// Create a processor with custom configuration.
    #[must_use]
    pub fn with_config(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Regenerate all directive content in `input`.
    ///
    /// `source_path` is the file the text came from; relative `src=` paths
    /// resolve against its directory.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] on an unknown command, a malformed directive
    /// argument list, or a generator failure. Processing stops at the first
    /// error.
    pub fn process_text(&self, input: &str, source_path: &Path) -> Result<Processed, ProcessError> {
        let old: Vec<&str> = input.split_inclusive('\n').collect();
        let base_dir = source_path.parent().unwrap_or(Path::new(""));
        let read_file = self.config.read_file.as_ref().map_or_else(
            || &default_read_file as &dyn Fn(&Path) -> io::Result<String>,
            |f| f.as_ref(),
        );

        let mut out = OutputLines::with_capacity(input.len());
        let mut directives = Vec::new();
        let mut index = 0;

        while index < old.len() {
            let line = old[index];
            index += 1;
            out.push_str(line);

            let directive = parse_line(line, source_path).map_err(|source| {
                ProcessError::Directive {
                    path: source_path.to_path_buf(),
                    line: index,
                    source,
                }
            })?;
            let Some(directive) = directive else {
                continue;
            };

            directives.push(line.trim().to_owned());
            // Generated content always starts on its own line.
            if !line.ends_with('\n') {
                out.push_str("\n");
            }
            let command = Command::from_name(&directive.command).ok_or_else(|| {
                ProcessError::UnknownCommand {
                    path: source_path.to_path_buf(),
                    line: index,
                    command: directive.command.clone(),
                }
            })?;

            tracing::debug!(
                path = %source_path.display(),
                line = index,
                command = command.name(),
                "Dispatching directive"
            );

            let ctx = GeneratorContext {
                source_path: &directive.source_file,
                base_dir,
                line: index,
                documentation_path: self.config.documentation_path.as_deref(),
                read_file,
            };
            (out, index) = command
                .generate(&directive.args, &ctx, &old, index, out)
                .map_err(|source| ProcessError::Generate {
                    path: source_path.to_path_buf(),
                    line: ctx.line,
                    source,
                })?;
        }

        Ok(Processed {
            text: out.into_text(),
            directives,
        })
    }

    /// Process a markdown file in place.
    ///
    /// The file is rewritten only if it contains directives and the
    /// regenerated text differs from what is on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] if the file cannot be read or written, or if
    /// processing its text fails. A failure leaves the file untouched.
    pub fn process_file(&self, path: &Path) -> Result<FileReport, ProcessError> {
        let input = std::fs::read_to_string(path).map_err(|source| ProcessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let processed = self.process_text(&input, path)?;

        let outcome = if processed.directives.is_empty() {
            Outcome::NoDirectives
        } else if processed.text == input {
            Outcome::Unchanged
        } else {
            Outcome::Changed
        };

        if outcome == Outcome::Changed && !self.config.dry_run {
            std::fs::write(path, &processed.text).map_err(|source| ProcessError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "Rewrote file");
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            directives: processed.directives,
            outcome,
        })
    }
}
