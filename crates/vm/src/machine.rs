//! Engine state: variable store, call stack, cursor.

use crate::config::EngineConfig;
use crate::memory::Memory;

/// A call frame for function invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// Name of the function being executed.
    pub function: String,
    /// Line index of the `call` that entered the function. Execution
    /// resumes on the line after it.
    pub return_line: usize,
}

/// How a run ended when it did not fail structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every reachable line executed.
    Completed,
    /// A command named a variable that was not in memory. The diagnostic
    /// line has been written and nothing after it ran.
    Halted {
        /// 1-based source line of the failed command.
        line: usize,
        /// The missing variable.
        variable: String,
    },
}

impl RunOutcome {
    /// True if the run reached the end of the program.
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed)
    }
}

/// The Kizhi execution engine.
///
/// A machine is reusable: [`Machine::run`] resets all state first, so the
/// same machine can execute a program any number of times. After a run the
/// store is left as the run left it, for inspection.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    /// Variable store.
    pub(crate) memory: Memory,
    /// Active calls, innermost last.
    pub(crate) call_stack: Vec<CallFrame>,
    /// Index of the next line to execute.
    pub(crate) pc: usize,
    pub(crate) config: EngineConfig,
}

impl Machine {
    /// Create a machine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            memory: Memory::new(),
            call_stack: Vec::new(),
            pc: 0,
            config,
        }
    }

    /// Clear the store and the call stack, and rewind to the first line.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.call_stack.clear();
        self.pc = 0;
    }

    /// The variable store.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Calls that were active when the last run stopped.
    pub fn call_stack(&self) -> &[CallFrame] {
        &self.call_stack
    }
}
