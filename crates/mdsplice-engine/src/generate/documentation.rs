//! `documentation` command: insert the directive reference.

use super::insert::{Insertion, InsertionType, splice};
use super::{DOCUMENTATION_ASSET, GenerateError, GeneratorContext, OutputLines};
use crate::directive::DirectiveArgs;

pub(super) fn generate(
    args: &DirectiveArgs,
    ctx: &GeneratorContext<'_>,
    old: &[&str],
    start: usize,
    out: OutputLines,
) -> Result<(OutputLines, usize), GenerateError> {
    if !args.is_empty() {
        tracing::debug!(line = ctx.line, "Ignoring arguments of documentation directive");
    }

    let (content, display) = match ctx.documentation_path {
        Some(path) => {
            let content = ctx.read(path).map_err(|source| GenerateError::ReadSource {
                path: path.to_path_buf(),
                source,
            })?;
            (content, path.to_string_lossy())
        }
        None => (DOCUMENTATION_ASSET.to_owned(), "<built-in>".into()),
    };

    let insertion = Insertion {
        src: &display,
        kind: InsertionType::Documentation,
        syntax: "text",
        annotation: None,
    };
    splice(&insertion, &content, ctx, old, start, out)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    const ASSET: &str = "<!-- Directives\n\n  |toc\n-->\n";

    fn run_with(
        documentation_path: Option<&Path>,
        args: &str,
        old: &[&str],
    ) -> Result<(String, usize), GenerateError> {
        let read = |path: &Path| {
            if path == Path::new("/tool/documentation.md") {
                Ok(ASSET.to_owned())
            } else {
                Err(std::io::Error::from(std::io::ErrorKind::NotFound))
            }
        };
        let ctx = GeneratorContext {
            source_path: Path::new("docs/readme.md"),
            base_dir: Path::new("docs"),
            line: 1,
            documentation_path,
            read_file: &read,
        };
        let args = DirectiveArgs::parse(args).unwrap();
        let (out, next) = generate(&args, &ctx, old, 1, OutputLines::new())?;
        Ok((out.into_text(), next))
    }

    fn run(args: &str, old: &[&str]) -> Result<(String, usize), GenerateError> {
        run_with(Some(Path::new("/tool/documentation.md")), args, old)
    }

    #[test]
    fn test_inserts_asset_without_delimiters() {
        let (text, next) = run("", &["<!-- |documentation -->\n", "Text\n"]).unwrap();
        assert_eq!(text, ASSET);
        assert_eq!(next, 1);
    }

    #[test]
    fn test_replaces_previous_asset() {
        let old = [
            "<!-- |documentation -->\n",
            "<!-- Old docs\n",
            "  stale\n",
            "-->\n",
            "Text\n",
        ];
        let (text, next) = run("", &old).unwrap();
        assert_eq!(text, ASSET);
        assert_eq!(next, 4);
    }

    #[test]
    fn test_arguments_cannot_redirect_source() {
        let (text, _) = run(",src=other.md,type=code", &["d\n"]).unwrap();
        assert_eq!(text, ASSET);
    }

    #[test]
    fn test_built_in_asset_needs_no_file() {
        let old = ["<!-- |documentation -->\n", "Text\n"];
        let (text, next) = run_with(None, "", &old).unwrap();
        assert_eq!(text, DOCUMENTATION_ASSET);
        assert_eq!(next, 1);
    }

    #[test]
    fn test_missing_configured_asset() {
        let err = run_with(Some(Path::new("/gone.md")), "", &["d\n"]).unwrap_err();
        match err {
            GenerateError::ReadSource { path, .. } => assert_eq!(path, Path::new("/gone.md")),
            other => panic!("expected ReadSource, got {other:?}"),
        }
    }
}
