//! `insert` command: splice another file's contents into the markdown.

use super::region::{Fence, skip_block};
use super::{GenerateError, GeneratorContext, OutputLines};
use crate::directive::{ArgValue, DirectiveArgs};

/// How inserted content is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionType {
    /// Fenced code block tagged with a syntax name.
    Code,
    /// Multi-line markdown comment.
    Comment,
    /// No wrapping; the inserted text carries its own comment markers.
    Documentation,
}

impl InsertionType {
    /// Look up an insertion type by its `type=` name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "code" => Some(Self::Code),
            "comment" => Some(Self::Comment),
            "documentation" => Some(Self::Documentation),
            _ => None,
        }
    }

    /// Text written before the inserted content.
    #[must_use]
    pub fn open_delimiter(self, syntax: &str) -> String {
        match self {
            Self::Code => format!("```{syntax}\n"),
            Self::Comment => "<!-- ".to_owned(),
            Self::Documentation => String::new(),
        }
    }

    /// Text written after the inserted content.
    #[must_use]
    pub fn close_delimiter(self) -> &'static str {
        match self {
            Self::Code => "```\n",
            Self::Comment => "\n     -->\n",
            Self::Documentation => "",
        }
    }

    /// Fences recognizing a block previously written with this type.
    #[must_use]
    pub fn fences(self) -> [Fence; 2] {
        match self {
            Self::Code => [Fence::StartsWith("```"), Fence::Contains("```")],
            Self::Comment | Self::Documentation => {
                [Fence::StartsWith("<!--"), Fence::Contains("-->")]
            }
        }
    }
}

/// Fully resolved insertion.
pub(super) struct Insertion<'a> {
    /// `src` as written in the directive, used in the path annotation.
    pub src: &'a str,
    pub kind: InsertionType,
    pub syntax: &'a str,
    /// Label of the `[label](src)` annotation, if requested.
    pub annotation: Option<&'a str>,
}

pub(super) fn generate(
    args: &DirectiveArgs,
    ctx: &GeneratorContext<'_>,
    old: &[&str],
    start: usize,
    out: OutputLines,
) -> Result<(OutputLines, usize), GenerateError> {
    let src = args.get("src").ok_or(GenerateError::MissingArgument {
        command: "insert",
        key: "src",
    })?;
    let kind = match args.get("type") {
        Some(name) => InsertionType::from_name(name)
            .ok_or_else(|| GenerateError::UnknownInsertionType(name.to_owned()))?,
        None => InsertionType::Code,
    };
    let annotation = args.value("addpath").map(|value| match value {
        ArgValue::Flag => src,
        ArgValue::Value(label) => label.as_str(),
    });

    let path = ctx.resolve_path(src);
    let content = ctx
        .read(&path)
        .map_err(|source| GenerateError::ReadSource { path, source })?;

    let insertion = Insertion {
        src,
        kind,
        syntax: args.get("syntax").unwrap_or("text"),
        annotation,
    };
    splice(&insertion, &content, ctx, old, start, out)
}

/// Write the insertion and skip the block it replaces.
pub(super) fn splice(
    insertion: &Insertion<'_>,
    content: &str,
    ctx: &GeneratorContext<'_>,
    old: &[&str],
    start: usize,
    mut out: OutputLines,
) -> Result<(OutputLines, usize), GenerateError> {
    let kind = insertion.kind;
    if kind == InsertionType::Code
        && let Some(label) = insertion.annotation
    {
        // Blank line keeps the fence from being swallowed by the paragraph.
        out.push_str(&format!("[{label}]({})\n\n", insertion.src));
    }
    out.push_str(&kind.open_delimiter(insertion.syntax));
    out.push_terminated(content);
    out.push_str(kind.close_delimiter());

    let fences = kind.fences();
    let block_start = if kind == InsertionType::Code {
        annotated_block_start(old, start, fences[0], insertion.src)
    } else {
        start
    };
    let next = skip_block(old, block_start, &fences)?;
    // An annotation with no block under it is user text, not ours.
    let next = if next == block_start { start } else { next };

    tracing::debug!(
        src = insertion.src,
        line = ctx.line,
        replaced = next - start,
        "Inserted file"
    );
    Ok((out, next))
}

/// Index of the open fence when an `addpath` annotation for `src` precedes it.
///
/// Only a `[label](src)` line naming this directive's own `src` counts, so
/// links written by hand are never taken for generated text. The annotation
/// is recognized whether or not `addpath` is currently set, so toggling it
/// never leaves a stale annotation behind.
fn annotated_block_start(old: &[&str], start: usize, open: Fence, src: &str) -> usize {
    let target = format!("]({src})");
    let is_annotation = |line: &str| {
        let line = line.trim_end();
        line.starts_with('[') && line.ends_with(&target)
    };
    if !old.get(start).is_some_and(|line| is_annotation(line)) {
        return start;
    }

    let mut index = start + 1;
    while old.get(index).is_some_and(|line| line.trim().is_empty()) {
        index += 1;
    }

    if old.get(index).is_some_and(|line| open.matches(line)) {
        index
    } else {
        start
    }
}
