//! Errors for the Kizhi program model.

use thiserror::Error;

/// Errors that occur while resolving a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
    /// The word is not one of the language keywords.
    #[error("unknown keyword '{0}'")]
    Unknown(String),
}
