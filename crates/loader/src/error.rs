//! Error types for the Kizhi loader.

use thiserror::Error;

/// Errors produced while loading source text into a program.
///
/// Every variant carries the 1-based source line number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The first token of a line is not a keyword.
    #[error("line {line}: unknown keyword '{token}'")]
    UnknownKeyword { line: usize, token: String },

    /// A keyword did not have enough operands.
    #[error("line {line}: {keyword} expects {expected} argument(s)")]
    MissingArgument {
        line: usize,
        keyword: &'static str,
        expected: usize,
    },

    /// An integer literal could not be parsed or does not fit in 64 bits.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },

    /// A `def` header inside an indented body.
    #[error("line {line}: nested def is not allowed")]
    NestedDef { line: usize },

    /// An indented line that does not follow a `def` header.
    #[error("line {line}: indented line outside of a function body")]
    UnexpectedIndent { line: usize },
}

impl LoadError {
    /// Source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            LoadError::UnknownKeyword { line, .. }
            | LoadError::MissingArgument { line, .. }
            | LoadError::InvalidNumber { line, .. }
            | LoadError::UnexpectedToken { line, .. }
            | LoadError::NestedDef { line }
            | LoadError::UnexpectedIndent { line } => *line,
        }
    }
}
