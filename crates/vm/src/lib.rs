//! Kizhi execution engine — runs loaded programs against a variable store.
//!
//! The engine is a cursor over the program's line table with:
//! - A variable store ([`Memory`]) of natural-number assignments
//! - An explicit call stack of [`CallFrame`]s
//! - A reset at the start of every run
//!
//! [`Interpreter`] wraps the engine in the line protocol (`set code`,
//! program text, `run`).
//!
//! # Usage
//!
//! ```
//! use kizhi_vm::Interpreter;
//!
//! let mut interp = Interpreter::new(Vec::new());
//! interp.execute_line("set code").unwrap();
//! interp.execute_line("def f\n    sub a 4\nset a 10\ncall f\nprint a").unwrap();
//! interp.execute_line("run").unwrap();
//! assert_eq!(interp.into_writer(), b"6\n");
//! ```

pub mod config;
pub mod error;
pub mod execute;
pub mod machine;
pub mod memory;
pub mod session;

pub use config::EngineConfig;
pub use error::{RuntimeError, SessionError};
pub use machine::{CallFrame, Machine, RunOutcome};
pub use memory::Memory;
pub use session::Interpreter;

use std::io::Write;

use kizhi_common::Program;

/// Execute a program once with the default configuration.
///
/// # Errors
///
/// Returns [`RuntimeError`] for structural faults (non-positive `set`,
/// undefined function, call depth, output failure). A missing variable is
/// reported through the output and [`RunOutcome::Halted`] instead.
pub fn run<W: Write>(program: &Program, out: &mut W) -> Result<RunOutcome, RuntimeError> {
    let mut machine = Machine::new(EngineConfig::default());
    machine.run(program, out)
}
