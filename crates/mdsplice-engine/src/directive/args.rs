//! Directive argument parsing.
//!
//! Parses the `,key=value,flag` tail of a directive line.

use std::collections::HashMap;

use super::DirectiveError;

/// Value of a single directive argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Bare token without `=`, e.g. `addpath`.
    Flag,
    /// Text after the first `=`, e.g. `shell` in `syntax=shell`.
    Value(String),
}

impl ArgValue {
    /// The text value, or `None` for a bare flag.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Value(value) => Some(value),
        }
    }
}

/// Parsed arguments of one directive.
///
/// Keys are unique; a repeated key is rejected during parsing.
///
/// # Example
///
/// ```
/// use mdsplice_engine::directive::{ArgValue, DirectiveArgs};
///
/// let args = DirectiveArgs::parse(",src=./x.sh,addpath").unwrap();
/// assert_eq!(args.get("src"), Some("./x.sh"));
/// assert_eq!(args.value("addpath"), Some(&ArgValue::Flag));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    attrs: HashMap<String, ArgValue>,
}

impl DirectiveArgs {
    /// Parse a comma-separated argument list.
    ///
    /// Empty pieces (leading or trailing commas) are ignored. Each piece is
    /// split on its first `=`; pieces without `=` become flags.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError::DuplicateArgument`] if a key repeats.
    pub fn parse(list: &str) -> Result<Self, DirectiveError> {
        let mut attrs = HashMap::new();

        for piece in list.split(',').filter(|p| !p.is_empty()) {
            let (key, value) = match piece.split_once('=') {
                Some((key, value)) => (key, ArgValue::Value(value.to_owned())),
                None => (piece, ArgValue::Flag),
            };
            if attrs.insert(key.to_owned(), value).is_some() {
                return Err(DirectiveError::DuplicateArgument(key.to_owned()));
            }
        }

        Ok(Self { attrs })
    }

    /// Get the text value of an argument. Flags yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(ArgValue::as_str)
    }

    /// Get the raw argument, flag or value.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&ArgValue> {
        self.attrs.get(key)
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the directive had no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}
