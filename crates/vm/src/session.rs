//! The line protocol: `set code`, the program blob, `run`.

use std::io::Write;

use crate::config::EngineConfig;
use crate::error::SessionError;
use crate::machine::{Machine, RunOutcome};
use kizhi_common::Program;
use tracing::{debug, trace};

/// Announces that the next submitted text is the program source.
pub const SET_CODE: &str = "set code";

/// Executes the loaded program once.
pub const RUN: &str = "run";

/// A protocol-driven interpreter writing program output to `W`.
///
/// Feed it one protocol message at a time with [`execute_line`]. The
/// message after `set code` is taken verbatim as the program source, even
/// if it contains newlines. Messages other than `set code` and `run` are
/// ignored.
///
/// [`execute_line`]: Interpreter::execute_line
pub struct Interpreter<W: Write> {
    out: W,
    machine: Machine,
    program: Option<Program>,
    awaiting_source: bool,
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter with the default configuration.
    pub fn new(out: W) -> Self {
        Self::with_config(out, EngineConfig::default())
    }

    /// Create an interpreter with a custom configuration.
    pub fn with_config(out: W, config: EngineConfig) -> Self {
        Self {
            out,
            machine: Machine::new(config),
            program: None,
            awaiting_source: false,
        }
    }

    /// Handle one protocol message.
    pub fn execute_line(&mut self, message: &str) -> Result<(), SessionError> {
        if self.awaiting_source {
            self.awaiting_source = false;
            return self.load(message);
        }

        match message.trim() {
            SET_CODE => {
                trace!("awaiting program source");
                self.awaiting_source = true;
            }
            RUN => {
                self.run()?;
            }
            other => trace!(message = other, "ignored"),
        }
        Ok(())
    }

    /// Replace the loaded program. On failure no program stays loaded.
    pub fn load(&mut self, source: &str) -> Result<(), SessionError> {
        self.program = None;
        self.machine.reset();
        let program = kizhi_loader::load(source)?;
        debug!(
            lines = program.len(),
            functions = program.functions.len(),
            "program replaced"
        );
        self.program = Some(program);
        Ok(())
    }

    /// Run the loaded program once.
    pub fn run(&mut self) -> Result<RunOutcome, SessionError> {
        let program = self.program.as_ref().ok_or(SessionError::NoProgram)?;
        let outcome = self.machine.run(program, &mut self.out)?;
        self.out.flush().map_err(crate::RuntimeError::from)?;
        Ok(outcome)
    }

    /// Consume the interpreter and return the output sink.
    pub fn into_writer(self) -> W {
        self.out
    }
}
