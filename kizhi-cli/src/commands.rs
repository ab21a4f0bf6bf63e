//! CLI command implementations.

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use kizhi_common::Program;
use kizhi_vm::{EngineConfig, Interpreter, Machine, RunOutcome, SessionError};
use tracing::info;

use crate::protocol::frame_messages;

/// Verify and execute a program file `repeat` times.
pub fn run(path: &Path, repeat: usize, config: EngineConfig) -> Result<(), i32> {
    let program = read_program(path)?;

    if let Err(errors) = kizhi_verifier::verify(&program) {
        for e in &errors {
            eprintln!("error: {e}");
        }
        return Err(2);
    }

    let mut machine = Machine::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for round in 1..=repeat {
        match machine.run(&program, &mut out) {
            Ok(RunOutcome::Completed) => {}
            Ok(RunOutcome::Halted { line, variable }) => {
                info!(round, line, variable = %variable, "run halted");
            }
            Err(e) => {
                eprintln!("runtime error: {e}");
                return Err(3);
            }
        }
    }

    out.flush().map_err(|e| {
        eprintln!("error: cannot write output: {e}");
        1
    })
}

/// Load and verify a program file.
pub fn check(path: &Path) -> Result<(), i32> {
    let program = read_program(path)?;

    match kizhi_verifier::verify(&program) {
        Ok(()) => {
            println!(
                "OK: {} ({} lines, {} functions)",
                path.display(),
                program.len(),
                program.functions.len()
            );
            Ok(())
        }
        Err(errors) => {
            for e in &errors {
                eprintln!("error: {e}");
            }
            Err(2)
        }
    }
}

/// Print a program file in canonical form.
pub fn fmt(path: &Path) -> Result<(), i32> {
    let program = read_program(path)?;
    print!("{}", kizhi_loader::format(&program));
    Ok(())
}

/// Feed protocol messages from `path` (or stdin) to an interpreter.
///
/// Each message is handled as soon as it is framed, so a `run` answers
/// before the input ends. Errors are reported as they happen and the
/// session continues; the exit code is that of the first failure.
pub fn session(path: Option<&Path>, config: EngineConfig) -> Result<(), i32> {
    match path {
        Some(path) => {
            let file = fs::File::open(path).map_err(|e| {
                eprintln!("error: cannot read '{}': {e}", path.display());
                1
            })?;
            drive(BufReader::new(file), config)
        }
        None => drive(io::stdin().lock(), config),
    }
}

fn drive<R: BufRead>(reader: R, config: EngineConfig) -> Result<(), i32> {
    let mut interp = Interpreter::with_config(io::stdout(), config);
    let mut first_failure = None;

    for message in frame_messages(reader) {
        let message = message.map_err(|e| {
            eprintln!("error: cannot read input: {e}");
            1
        })?;
        if let Err(e) = interp.execute_line(&message) {
            eprintln!("error: {e}");
            first_failure.get_or_insert(exit_code(&e));
        }
    }

    match first_failure {
        Some(code) => Err(code),
        None => Ok(()),
    }
}

fn exit_code(err: &SessionError) -> i32 {
    match err {
        SessionError::Load(_) | SessionError::NoProgram => 1,
        SessionError::Runtime(_) => 3,
    }
}

/// Read and load a program file.
fn read_program(path: &Path) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;

    kizhi_loader::load(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
