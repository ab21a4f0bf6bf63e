//! Verification errors for the Kizhi verifier.
//!
//! Every error includes the 1-based source line it points at.
//! The verifier collects ALL errors, not just the first.

use thiserror::Error;

/// Problems found by static verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// A function name is defined more than once. The last definition wins
    /// and the earlier bodies are never run or checked.
    #[error("line {line}: function '{name}' redefined; the definition at line {first_line} is unreachable")]
    DuplicateFunction {
        line: usize,
        name: String,
        first_line: usize,
    },

    /// `call` to a name with no definition.
    #[error("line {line}: call to undefined function '{name}'")]
    UndefinedFunction { line: usize, name: String },

    /// `call` that can re-enter a function that is already active.
    #[error("line {line}: recursive call to '{name}' is not supported")]
    RecursiveCall { line: usize, name: String },

    /// `set` with a literal that is not a natural number.
    #[error("line {line}: cannot set '{name}' to {value}: value must be positive")]
    NonPositiveValue { line: usize, name: String, value: i64 },
}

impl VerifyError {
    /// Source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            VerifyError::DuplicateFunction { line, .. }
            | VerifyError::UndefinedFunction { line, .. }
            | VerifyError::RecursiveCall { line, .. }
            | VerifyError::NonPositiveValue { line, .. } => *line,
        }
    }
}
