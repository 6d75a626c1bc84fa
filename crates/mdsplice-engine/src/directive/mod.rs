//! Directive comments embedded in markdown.
//!
//! A directive is a single-line HTML comment whose body starts with `|`:
//!
//! ```text
//! <!-- |insert,src=./build.sh,type=code,syntax=shell -->
//! <!-- |toc -->
//! ```
//!
//! The first token is the command name, followed by comma-separated
//! arguments. Each argument is either `key=value` or a bare flag.
//!
//! Lines that do not match this shape are ordinary text, never an error.

mod args;
mod parser;

use std::path::PathBuf;

pub use args::{ArgValue, DirectiveArgs};
pub use parser::parse_line;

/// A recognized directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Command name selecting the generator (`insert`, `documentation`, `toc`).
    pub command: String,
    /// Arguments following the command name.
    pub args: DirectiveArgs,
    /// Markdown file containing the directive. Relative `src=` paths resolve
    /// against its directory.
    pub source_file: PathBuf,
}

/// Error for a directive line that matches the syntax but is inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    /// The same argument key appears more than once.
    #[error("argument `{0}` given more than once")]
    DuplicateArgument(String),
}
