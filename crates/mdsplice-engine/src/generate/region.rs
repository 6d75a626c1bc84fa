//! Locating previously generated blocks.
//!
//! A generated block is recognized by an ordered list of fences: the first
//! fence must match the line right after the directive, and every following
//! fence must match some later line, in order. The block ends one past the
//! line matching the last fence.

use std::fmt;

use super::GenerateError;

/// Pattern marking the start or end of a generated block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    /// Line begins with the marker.
    StartsWith(&'static str),
    /// Line contains the marker anywhere.
    Contains(&'static str),
}

impl Fence {
    /// Check whether a line matches this fence.
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::StartsWith(marker) => line.starts_with(marker),
            Self::Contains(marker) => line.contains(marker),
        }
    }
}

impl fmt::Display for Fence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Self::StartsWith(marker) | Self::Contains(marker)) = self;
        f.write_str(marker)
    }
}

/// Find the end of the old block starting at `start`.
///
/// Each line is tested against the first fence not yet matched, and one line
/// matches at most one fence. Returns `start` unchanged when the line at
/// `start` does not match the first fence (nothing was generated there yet).
///
/// # Errors
///
/// Returns [`GenerateError::MalformedBlock`] when input runs out before the
/// last fence matches.
pub(crate) fn skip_block(old: &[&str], start: usize, fences: &[Fence]) -> Result<usize, GenerateError> {
    let Some(first) = fences.first() else {
        return Ok(start);
    };
    if !old.get(start).is_some_and(|line| first.matches(line)) {
        return Ok(start);
    }

    let mut remaining = fences;
    let mut index = start;
    while let Some((fence, rest)) = remaining.split_first() {
        let Some(line) = old.get(index) else {
            return Err(GenerateError::MalformedBlock {
                line: start + 1,
                expected: *fence,
            });
        };
        if fence.matches(line) {
            remaining = rest;
        }
        index += 1;
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: [Fence; 2] = [Fence::StartsWith("```"), Fence::Contains("```")];
    const COMMENT: [Fence; 2] = [Fence::StartsWith("<!--"), Fence::Contains("-->")];

    #[test]
    fn test_no_block_returns_start() {
        let old = ["<!-- |insert -->\n", "Some text\n", "```\n"];
        assert_eq!(skip_block(&old, 1, &CODE).unwrap(), 1);
    }

    #[test]
    fn test_start_at_end_of_file() {
        let old = ["<!-- |insert -->\n"];
        assert_eq!(skip_block(&old, 1, &CODE).unwrap(), 1);
    }

    #[test]
    fn test_skip_code_block() {
        let old = [
            "<!-- |insert -->\n",
            "```shell\n",
            "stale\n",
            "```\n",
            "after\n",
        ];
        assert_eq!(skip_block(&old, 1, &CODE).unwrap(), 4);
    }

    #[test]
    fn test_open_fence_line_cannot_close() {
        // `<!-- x -->` matches both fences, but only counts as the opener.
        let old = ["<!-- x -->\n", "body\n", "     -->\n", "after\n"];
        assert_eq!(skip_block(&old, 0, &COMMENT).unwrap(), 3);
    }

    #[test]
    fn test_close_fence_matches_anywhere_in_line() {
        let old = ["<!-- a\n", "b\n", "end -->\n"];
        assert_eq!(skip_block(&old, 0, &COMMENT).unwrap(), 3);
    }

    #[test]
    fn test_unterminated_block_is_error() {
        let old = ["<!-- |insert -->\n", "```shell\n", "never closed\n"];
        let err = skip_block(&old, 1, &CODE).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::MalformedBlock {
                line: 2,
                expected: Fence::Contains("```")
            }
        ));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_fence_list() {
        let old = ["a\n"];
        assert_eq!(skip_block(&old, 0, &[]).unwrap(), 0);
    }

    #[test]
    fn test_fence_display() {
        assert_eq!(Fence::StartsWith("```").to_string(), "```");
        assert_eq!(Fence::Contains("-->").to_string(), "-->");
    }
}
