//! Colored terminal report of processed files.

use console::{Style, Term};
use mdsplice_engine::{FileReport, Outcome};

/// Terminal report writer.
///
/// Writes to stderr. Files without directives are never mentioned.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new report writer.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    fn styled(&self, style: &Style, msg: &str) {
        self.line(&style.apply_to(msg).to_string());
    }

    /// Report one processed file: its path, each directive, then the outcome.
    pub(crate) fn file(&self, report: &FileReport, check: bool) {
        let status = match report.outcome {
            Outcome::NoDirectives => return,
            Outcome::Unchanged => None,
            Outcome::Changed if check => Some((&self.yellow, "WOULD CHANGE")),
            Outcome::Changed => Some((&self.green, "CHANGED")),
        };

        self.styled(&self.cyan_bold, &report.path.display().to_string());
        for directive in &report.directives {
            self.line(directive);
        }
        match status {
            Some((style, msg)) => self.styled(style, msg),
            None => self.line("No change"),
        }
    }

    /// Report totals over all files with directives.
    pub(crate) fn summary(&self, summary: &Summary, check: bool) {
        if summary.changed + summary.unchanged == 0 {
            return;
        }
        let verb = if check { "stale" } else { "updated" };
        self.line(&format!(
            "{} file(s) {verb}, {} unchanged",
            summary.changed, summary.unchanged
        ));
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }
}

/// Outcome counts over a run.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub changed: usize,
    pub unchanged: usize,
}

impl Summary {
    /// Count one file.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::NoDirectives => {}
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Changed => self.changed += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_ignores_files_without_directives() {
        let mut summary = Summary::default();
        summary.record(Outcome::NoDirectives);
        summary.record(Outcome::Changed);
        summary.record(Outcome::Unchanged);
        summary.record(Outcome::Unchanged);

        assert_eq!(
            summary,
            Summary {
                changed: 1,
                unchanged: 2
            }
        );
    }
}
