//! Errors for the Kizhi engine and protocol session.
//!
//! A missing variable is not an error: it ends the run with
//! [`RunOutcome::Halted`](crate::RunOutcome::Halted) and a diagnostic line.
//! Everything here is a structural fault the caller has to handle.

use kizhi_loader::LoadError;
use thiserror::Error;

/// Errors that stop a run and propagate to the caller.
///
/// Every variant that comes from a program line carries its 1-based
/// source line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// `set` with a value that is not a natural number.
    #[error("line {line}: cannot set '{name}' to {value}: value must be positive")]
    InvalidValue { line: usize, name: String, value: i64 },

    /// `call` to a name that has no definition.
    #[error("line {line}: call to undefined function '{name}'")]
    UndefinedFunction { line: usize, name: String },

    /// The call stack reached the configured limit. Only recursive
    /// programs get here.
    #[error("line {line}: call depth exceeded limit {limit} (recursive call?)")]
    CallDepthExceeded { line: usize, limit: usize },

    /// The output sink rejected a write.
    #[error("output error: {message}")]
    Output { message: String },
}

impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self {
        RuntimeError::Output {
            message: err.to_string(),
        }
    }
}

/// Errors surfaced by [`Interpreter::execute_line`](crate::Interpreter::execute_line).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The submitted source could not be loaded.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// The run stopped on a structural fault.
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// `run` arrived before any program was loaded.
    #[error("no program loaded")]
    NoProgram,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::InvalidValue {
                line: 1,
                name: "m".to_string(),
                value: 0
            }
            .to_string(),
            "line 1: cannot set 'm' to 0: value must be positive"
        );
        assert_eq!(
            RuntimeError::UndefinedFunction {
                line: 4,
                name: "f".to_string()
            }
            .to_string(),
            "line 4: call to undefined function 'f'"
        );
        assert_eq!(
            RuntimeError::CallDepthExceeded { line: 2, limit: 8 }.to_string(),
            "line 2: call depth exceeded limit 8 (recursive call?)"
        );
    }

    #[test]
    fn io_error_becomes_output_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(
            RuntimeError::from(io),
            RuntimeError::Output {
                message: "pipe closed".to_string()
            }
        );
    }

    #[test]
    fn session_error_wraps_sources() {
        let err: SessionError = LoadError::NestedDef { line: 3 }.into();
        assert_eq!(err.to_string(), "load error: line 3: nested def is not allowed");
        assert_eq!(SessionError::NoProgram.to_string(), "no program loaded");
    }
}
