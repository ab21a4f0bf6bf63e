//! Structural pass for Kizhi programs.
//!
//! Detects duplicate definitions and builds the ProgramContext (call sites
//! per function and at the top level) used by later passes.

use std::collections::HashMap;

use crate::error::VerifyError;
use kizhi_common::{Program, Statement};

/// A `call` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Name of the called function.
    pub callee: String,
    /// 1-based source line of the call.
    pub line: usize,
}

/// Metadata about a function definition that is live in the function table.
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    /// Function name.
    pub name: String,
    /// Calls made from the body, in order.
    pub calls: Vec<CallSite>,
}

/// Context built from the structural pass, consumed by later passes.
#[derive(Debug, Clone, Default)]
pub struct ProgramContext {
    /// Live function definitions, in source order.
    pub functions: Vec<FunctionInfo>,
    /// Calls made outside any function body, in order.
    pub top_level_calls: Vec<CallSite>,
}

impl ProgramContext {
    /// Look up a live function by name.
    pub fn function(&self, name: &str) -> Option<&FunctionInfo> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// Run the structural pass.
///
/// Returns the ProgramContext and any errors found.
pub fn check_structural(program: &Program) -> (ProgramContext, Vec<VerifyError>) {
    let mut errors = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut top_level_calls = Vec::new();

    for line in program.lines.iter().filter(|l| !l.indented) {
        match &line.statement {
            Statement::Def { name } => match first_seen.get(name.as_str()) {
                Some(&first_line) => errors.push(VerifyError::DuplicateFunction {
                    line: line.number,
                    name: name.clone(),
                    first_line,
                }),
                None => {
                    first_seen.insert(name.as_str(), line.number);
                }
            },
            Statement::Call { name } => top_level_calls.push(CallSite {
                callee: name.clone(),
                line: line.number,
            }),
            Statement::Command(_) => {}
        }
    }

    let functions = program
        .functions
        .iter()
        .map(|(name, def_index)| FunctionInfo {
            name: name.to_string(),
            calls: program.lines[program.body(def_index)]
                .iter()
                .filter_map(|l| match &l.statement {
                    Statement::Call { name } => Some(CallSite {
                        callee: name.clone(),
                        line: l.number,
                    }),
                    _ => None,
                })
                .collect(),
        })
        .collect();

    (
        ProgramContext {
            functions,
            top_level_calls,
        },
        errors,
    )
}
