//! Main execution loop and command dispatch for the Kizhi engine.
//!
//! The cursor walks the line table. With an empty call stack it is at the
//! top level, where `def` blocks are skipped. With a non-empty stack it is
//! inside the body of the innermost active function; leaving the indented
//! block pops the frame and resumes after the `call` that entered it.

use std::io::Write;

use crate::error::RuntimeError;
use crate::machine::{CallFrame, Machine, RunOutcome};
use kizhi_common::{Command, Program, Statement};
use tracing::{debug, trace, warn};

/// Result of executing one primitive command.
enum Step {
    Continue,
    Missing,
}

impl Machine {
    /// Execute `program` from its first line against a fresh store.
    ///
    /// Output lines go to `out`. A missing variable writes the configured
    /// diagnostic and returns [`RunOutcome::Halted`]; structural faults
    /// return `Err` and leave the store exactly as it was before the
    /// failing line.
    pub fn run<W: Write>(
        &mut self,
        program: &Program,
        out: &mut W,
    ) -> Result<RunOutcome, RuntimeError> {
        self.reset();
        debug!(lines = program.len(), "run started");

        loop {
            if let Some(frame) = self.call_stack.last() {
                if !program.is_indented(self.pc) {
                    self.pc = frame.return_line + 1;
                    debug!(function = %frame.function, resume = self.pc, "return");
                    self.call_stack.pop();
                    continue;
                }
            }

            let Some(line) = program.line(self.pc) else {
                break;
            };
            trace!(line = line.number, depth = self.call_stack.len(), statement = %line.statement);

            match &line.statement {
                Statement::Def { .. } => {
                    self.pc = program.body(self.pc).end;
                }
                Statement::Call { name } => {
                    self.exec_call(program, name, line.number)?;
                }
                Statement::Command(cmd) => match self.exec_command(cmd, line.number, out)? {
                    Step::Continue => self.pc += 1,
                    Step::Missing => {
                        let variable = cmd.variable().to_string();
                        warn!(line = line.number, variable = %variable, "variable not found, run halted");
                        writeln!(out, "{}", self.config.missing_variable_message)?;
                        return Ok(RunOutcome::Halted {
                            line: line.number,
                            variable,
                        });
                    }
                },
            }
        }

        debug!(variables = self.memory.len(), "run completed");
        Ok(RunOutcome::Completed)
    }

    /// Push a frame and jump to the first body line of `name`.
    fn exec_call(&mut self, program: &Program, name: &str, line: usize) -> Result<(), RuntimeError> {
        let def_index = program
            .functions
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedFunction {
                line,
                name: name.to_string(),
            })?;

        if self.call_stack.len() >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded {
                line,
                limit: self.config.max_call_depth,
            });
        }

        debug!(function = %name, from = line, depth = self.call_stack.len() + 1, "call");
        self.call_stack.push(CallFrame {
            function: name.to_string(),
            return_line: self.pc,
        });
        self.pc = def_index + 1;
        Ok(())
    }

    /// Apply one primitive command to the store.
    fn exec_command<W: Write>(
        &mut self,
        cmd: &Command,
        line: usize,
        out: &mut W,
    ) -> Result<Step, RuntimeError> {
        match cmd {
            Command::Set { name, value } => {
                if *value <= 0 {
                    return Err(RuntimeError::InvalidValue {
                        line,
                        name: name.clone(),
                        value: *value,
                    });
                }
                self.memory.set(name, *value);
            }
            Command::Sub { name, value } => {
                if self.memory.subtract(name, *value).is_none() {
                    return Ok(Step::Missing);
                }
            }
            Command::Rem { name } => {
                if self.memory.remove(name).is_none() {
                    return Ok(Step::Missing);
                }
            }
            Command::Print { name } => match self.memory.get(name) {
                Some(value) => writeln!(out, "{value}")?,
                None => return Ok(Step::Missing),
            },
        }
        Ok(Step::Continue)
    }
}
