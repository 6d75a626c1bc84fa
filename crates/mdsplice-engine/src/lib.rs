//! Directive engine for mdsplice.
//!
//! Markdown files carry single-line directive comments such as
//! `<!-- |insert,src=./run.sh,syntax=shell -->`. The engine regenerates the
//! block below each directive (an inserted file, a table of contents, or the
//! bundled directive documentation) and rewrites the file only when the
//! result differs.
//!
//! # Architecture
//!
//! - [`Walker`] yields markdown files breadth-first.
//! - [`FileProcessor`] copies lines through and dispatches each directive.
//! - [`directive`] recognizes directive lines and splits their arguments.
//! - [`generate`] holds the generators and the fence scan that finds the
//!   block a generator replaces.
//!
//! Regeneration is idempotent: a second run over its own output reports
//! every file as unchanged.

pub mod directive;
pub mod generate;
mod processor;
mod walker;

pub use processor::{FileProcessor, FileReport, Outcome, ProcessError, Processed, ProcessorConfig};
pub use walker::{WalkError, Walker};
