//! Generator context.
//!
//! Provides file system access and directive location to generators.

use std::io;
use std::path::{Path, PathBuf};

/// Type alias for the file reading callback function.
pub type ReadFileFn = dyn Fn(&Path) -> io::Result<String> + Send + Sync;

/// Context provided to a generator for one directive.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use mdsplice_engine::generate::GeneratorContext;
///
/// let ctx = GeneratorContext {
///     source_path: Path::new("docs/guide.md"),
///     base_dir: Path::new("docs"),
///     line: 3,
///     documentation_path: None,
///     read_file: &|path| std::fs::read_to_string(path),
/// };
///
/// assert_eq!(ctx.resolve_path("./run.sh"), Path::new("docs/./run.sh"));
/// ```
pub struct GeneratorContext<'a> {
    /// Markdown file containing the directive.
    pub source_path: &'a Path,
    /// Directory of `source_path`, used to resolve relative `src=` paths.
    pub base_dir: &'a Path,
    /// Line number of the directive (1-indexed).
    pub line: usize,
    /// File inserted by the `documentation` command instead of the built-in
    /// reference.
    pub documentation_path: Option<&'a Path>,
    /// Callback to read a file from the file system.
    pub read_file: &'a dyn Fn(&Path) -> io::Result<String>,
}

impl GeneratorContext<'_> {
    /// Resolve a path against the directory of the markdown file.
    ///
    /// Absolute paths are returned unchanged.
    #[must_use]
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }

    /// Read a file through the configured callback.
    pub(crate) fn read(&self, path: &Path) -> io::Result<String> {
        (self.read_file)(path)
    }
}
