//! Engine configuration.

/// Default bound on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1_024;

/// Diagnostic written when a command names a variable that is not in memory.
pub const MISSING_VARIABLE_MESSAGE: &str = "Variable not found in memory";

/// Tunables for a [`Machine`](crate::Machine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of simultaneously active calls. Non-recursive programs
    /// never need more frames than they have functions.
    pub max_call_depth: usize,
    /// Line written to the output on a missing-variable fault.
    pub missing_variable_message: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            missing_variable_message: MISSING_VARIABLE_MESSAGE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Replace the call depth limit.
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Replace the missing-variable diagnostic, e.g. for localization.
    pub fn with_missing_variable_message(mut self, message: impl Into<String>) -> Self {
        self.missing_variable_message = message.into();
        self
    }
}
