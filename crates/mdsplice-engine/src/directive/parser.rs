//! Directive line recognition.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{Directive, DirectiveArgs, DirectiveError};

/// `<!-- |command,key=value,flag -->` on a line of its own.
static DIRECTIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<!-- \|(?P<command>\w+)(?P<args>(?:,\w+(?:=[^,]+)?)*),? -->\s*$").unwrap()
});

/// Parse a line for a directive.
///
/// Returns `Ok(None)` if the line is not a directive. The command name is
/// not checked here; dispatch decides whether a generator exists for it.
///
/// # Errors
///
/// Returns [`DirectiveError`] if the line is a directive with repeated
/// argument keys.
pub fn parse_line(line: &str, source_file: &Path) -> Result<Option<Directive>, DirectiveError> {
    let Some(caps) = DIRECTIVE_PATTERN.captures(line) else {
        return Ok(None);
    };

    let args = DirectiveArgs::parse(&caps["args"])?;

    Ok(Some(Directive {
        command: caps["command"].to_owned(),
        args,
        source_file: source_file.to_path_buf(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::ArgValue;

    fn parse(line: &str) -> Option<Directive> {
        parse_line(line, Path::new("docs/readme.md")).unwrap()
    }

    #[test]
    fn test_insert_directive() {
        let directive =
            parse("<!-- |insert,src=./x.sh,type=code,syntax=shell -->\n").unwrap();

        assert_eq!(directive.command, "insert");
        assert_eq!(directive.args.get("src"), Some("./x.sh"));
        assert_eq!(directive.args.get("type"), Some("code"));
        assert_eq!(directive.args.get("syntax"), Some("shell"));
        assert_eq!(directive.source_file, Path::new("docs/readme.md"));
    }

    #[test]
    fn test_command_only() {
        let directive = parse("<!-- |toc -->\n").unwrap();
        assert_eq!(directive.command, "toc");
        assert!(directive.args.is_empty());
    }

    #[test]
    fn test_flag_argument() {
        let directive = parse("<!-- |insert,src=a.py,addpath -->").unwrap();
        assert_eq!(directive.args.value("addpath"), Some(&ArgValue::Flag));
    }

    #[test]
    fn test_value_with_spaces() {
        let directive = parse("<!-- |insert,src=my file.txt -->\n").unwrap();
        assert_eq!(directive.args.get("src"), Some("my file.txt"));
    }

    #[test]
    fn test_crlf_line() {
        assert!(parse("<!-- |toc -->\r\n").is_some());
    }

    #[test]
    fn test_unknown_command_still_parses() {
        let directive = parse("<!-- |frobnicate -->\n").unwrap();
        assert_eq!(directive.command, "frobnicate");
    }

    #[test]
    fn test_not_directive() {
        assert!(parse("regular text\n").is_none());
        assert!(parse("").is_none());
        // Plain comment without the pipe marker
        assert!(parse("<!-- toc -->\n").is_none());
        // Indented
        assert!(parse("  <!-- |toc -->\n").is_none());
        // Trailing text after the comment
        assert!(parse("<!-- |toc --> more\n").is_none());
        // Missing space before close marker
        assert!(parse("<!-- |toc-->\n").is_none());
        // Empty command
        assert!(parse("<!-- | -->\n").is_none());
        // Invalid key
        assert!(parse("<!-- |insert,sr-c=x -->\n").is_none());
    }

    #[test]
    fn test_duplicate_argument_is_error() {
        let result = parse_line("<!-- |insert,src=a,src=b -->\n", Path::new("a.md"));
        assert!(matches!(result, Err(DirectiveError::DuplicateArgument(_))));
    }
}
