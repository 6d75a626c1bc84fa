//! Markdown file discovery by breadth-first directory walking.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised while walking the directory tree.
#[derive(Debug, thiserror::Error)]
#[error("cannot read directory {}: {source}", path.display())]
pub struct WalkError {
    /// Directory that could not be listed.
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Breadth-first iterator over files with a given extension.
///
/// Directories are listed one at a time from a FIFO worklist. Within a
/// directory, entries are visited in file name order; files matching the
/// extension are yielded before the next directory is listed.
///
/// Symbolic links to directories are followed without loop detection.
///
/// # Example
///
/// ```no_run
/// use mdsplice_engine::Walker;
///
/// for path in Walker::new(".", "md") {
///     println!("{}", path.unwrap().display());
/// }
/// ```
#[derive(Debug)]
pub struct Walker {
    extension: String,
    dirs: VecDeque<PathBuf>,
    files: VecDeque<PathBuf>,
}

impl Walker {
    /// Walk `root` for files whose extension equals `extension`
    /// (case-insensitive, without the leading dot).
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            dirs: VecDeque::from([root.into()]),
            files: VecDeque::new(),
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&self.extension))
    }

    /// List one directory, queueing subdirectories and matching files.
    fn scan_directory(&mut self, dir: &Path) -> Result<(), WalkError> {
        let to_error = |source| WalkError {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(dir)
            .map_err(to_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_error)?;
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                self.dirs.push_back(path);
            } else if self.matches_extension(&path) {
                self.files.push_back(path);
            }
        }

        tracing::debug!(dir = %dir.display(), "Scanned directory");
        Ok(())
    }
}

impl Iterator for Walker {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.files.pop_front() {
                return Some(Ok(file));
            }
            let dir = self.dirs.pop_front()?;
            if let Err(err) = self.scan_directory(&dir) {
                return Some(Err(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    fn relative(root: &Path, walker: Walker) -> Vec<String> {
        walker
            .map(|p| {
                p.unwrap()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_breadth_first_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("b/deep/z.md"));
        touch(&root.join("a/inner.md"));
        touch(&root.join("top.md"));
        touch(&root.join("b/mid.md"));

        assert_eq!(
            relative(root, Walker::new(root, "md")),
            vec!["top.md", "a/inner.md", "b/mid.md", "b/deep/z.md"]
        );
    }

    #[test]
    fn test_extension_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("upper.MD"));
        touch(&root.join("mixed.Md"));
        touch(&root.join("notes.txt"));
        touch(&root.join("md"));
        touch(&root.join("archive.md.bak"));

        assert_eq!(
            relative(root, Walker::new(root, "md")),
            vec!["mixed.Md", "upper.MD"]
        );
    }

    #[test]
    fn test_directory_named_like_markdown_is_walked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("guide.md/page.md"));

        assert_eq!(
            relative(root, Walker::new(root, "md")),
            vec!["guide.md/page.md"]
        );
    }

    #[test]
    fn test_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("page.markdown"));
        touch(&root.join("page.md"));

        assert_eq!(
            relative(root, Walker::new(root, "markdown")),
            vec!["page.markdown"]
        );
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let mut walker = Walker::new(&missing, "md");
        let err = walker.next().unwrap().unwrap_err();
        assert_eq!(err.path, missing);
        assert!(walker.next().is_none());
    }
}
