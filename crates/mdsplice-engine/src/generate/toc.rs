//! `toc` command: table of contents from the headings below the directive.

use super::OutputLines;

/// Deepest indent level; `######` headings share the level of `#####`.
const MAX_LEVEL: usize = 4;

/// One heading in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Indent level (0-based, at most 4).
    pub level: usize,
    /// Heading text without `#` markers.
    pub title: String,
    /// Anchor id (without `#`).
    pub id: String,
}

impl TocEntry {
    /// Build an entry from a heading line, or `None` if the line is not one.
    #[must_use]
    pub fn from_heading(line: &str) -> Option<Self> {
        if !line.starts_with('#') {
            return None;
        }

        let hashes = line.chars().take_while(|&c| c == '#').count();
        let title = line.trim_start_matches([' ', '#']).trim();

        Some(Self {
            level: (hashes - 1).min(MAX_LEVEL),
            title: title.to_owned(),
            id: slugify(title),
        })
    }

    /// Render as a bullet line: `<indent> - [Title](#id)`.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{} - [{}](#{})\n", "  ".repeat(self.level), self.title, self.id)
    }
}

/// Convert heading text to an anchor id.
///
/// Lowercases, turns spaces into dashes, and drops everything except
/// ASCII lowercase letters, dashes and underscores.
///
/// # Example
///
/// ```
/// use mdsplice_engine::generate::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Step 2: Build"), "step--build");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c == '-' || c == '_')
        .collect()
}

/// Collect headings from `start` to end of file, skipping fenced code.
fn collect_entries(old: &[&str], start: usize) -> Vec<TocEntry> {
    let mut in_code = false;
    let mut entries = Vec::new();

    for line in old.iter().skip(start) {
        if line.starts_with("```") {
            in_code = !in_code;
        }
        if in_code {
            continue;
        }
        if let Some(entry) = TocEntry::from_heading(line) {
            entries.push(entry);
        }
    }

    entries
}

pub(super) fn generate(old: &[&str], start: usize, mut out: OutputLines) -> (OutputLines, usize) {
    let entries = collect_entries(old, start);
    for entry in &entries {
        out.push_str(&entry.to_line());
    }

    // The old table of contents is the run of bullet lines right below.
    let mut next = start;
    while old
        .get(next)
        .is_some_and(|line| line.trim_start().starts_with("- "))
    {
        next += 1;
    }

    tracing::debug!(entries = entries.len(), replaced = next - start, "Generated toc");
    (out, next)
}
