//! Accumulator for the rewritten file.

/// Text of the rewritten file, built up line by line.
///
/// Generators take the accumulator by value and hand it back with the next
/// scan index, so exactly one owner appends at any time.
#[derive(Debug, Default)]
pub struct OutputLines {
    text: String,
}

impl OutputLines {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty accumulator with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    /// Append text verbatim. Callers supply their own line terminators.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append text, adding a newline if it does not already end with one.
    ///
    /// Empty text appends nothing.
    pub fn push_terminated(&mut self, text: &str) {
        self.text.push_str(text);
        if !text.is_empty() && !text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    /// Consume the accumulator, returning the full text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
