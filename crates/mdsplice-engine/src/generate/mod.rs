//! Content generators.
//!
//! Each directive command maps to one generator. A generator receives the
//! output accumulated so far, appends its replacement content, and returns it
//! together with the index in the old lines where scanning resumes (just past
//! the previously generated block it supersedes).

mod context;
mod documentation;
mod insert;
mod output;
mod region;
mod toc;

use std::io;
use std::path::PathBuf;

pub use context::{GeneratorContext, ReadFileFn};
pub use insert::InsertionType;
pub use output::OutputLines;
pub use region::Fence;
pub use toc::{TocEntry, slugify};

use crate::directive::DirectiveArgs;

/// Directive reference built into the binary, used by `documentation`
/// unless a file is configured instead.
pub const DOCUMENTATION_ASSET: &str = include_str!("../../assets/documentation.md");

/// Directive commands with a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert the contents of another file.
    Insert,
    /// Insert the bundled directive documentation.
    Documentation,
    /// Generate a table of contents from the headings that follow.
    Toc,
}

impl Command {
    /// Look up a command by its directive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "insert" => Some(Self::Insert),
            "documentation" => Some(Self::Documentation),
            "toc" => Some(Self::Toc),
            _ => None,
        }
    }

    /// Directive name of the command.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Documentation => "documentation",
            Self::Toc => "toc",
        }
    }

    /// Run the generator for this command.
    ///
    /// `start` is the index of the line right after the directive.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if a source cannot be read, an argument is
    /// missing or invalid, or an old block is not terminated.
    pub fn generate(
        self,
        args: &DirectiveArgs,
        ctx: &GeneratorContext<'_>,
        old: &[&str],
        start: usize,
        out: OutputLines,
    ) -> Result<(OutputLines, usize), GenerateError> {
        match self {
            Self::Insert => insert::generate(args, ctx, old, start, out),
            Self::Documentation => documentation::generate(args, ctx, old, start, out),
            Self::Toc => Ok(toc::generate(old, start, out)),
        }
    }
}

/// Error raised while generating content for a directive.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A required argument is absent.
    #[error("`{command}` requires a `{key}=` argument")]
    MissingArgument {
        command: &'static str,
        key: &'static str,
    },
    /// The `type=` argument names no insertion type.
    #[error("unknown insertion type `{0}` (expected code, comment or documentation)")]
    UnknownInsertionType(String),
    /// The file to insert could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A previously generated block starts but its closing fence never appears.
    #[error("malformed existing block starting at line {line}: end of file before `{expected}`")]
    MalformedBlock {
        /// 1-based line where the old block starts.
        line: usize,
        /// Fence still expected when input ran out.
        expected: Fence,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_lookup() {
        assert_eq!(Command::from_name("insert"), Some(Command::Insert));
        assert_eq!(
            Command::from_name("documentation"),
            Some(Command::Documentation)
        );
        assert_eq!(Command::from_name("toc"), Some(Command::Toc));
        assert_eq!(Command::from_name("Insert"), None);
        assert_eq!(Command::from_name("include"), None);
    }

    #[test]
    fn test_command_name_roundtrip() {
        for command in [Command::Insert, Command::Documentation, Command::Toc] {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn test_bundled_documentation_asset_has_comment_fences() {
        let lines: Vec<&str> = DOCUMENTATION_ASSET.split_inclusive('\n').collect();
        assert!(lines[0].starts_with("<!--"));
        assert!(lines.last().unwrap().contains("-->"));
        // Only the last line may close the comment
        assert!(lines[..lines.len() - 1].iter().all(|l| !l.contains("-->")));
    }
}
