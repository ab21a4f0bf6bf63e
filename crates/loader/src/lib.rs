//! Kizhi loader — source text to an indexed [`Program`].
//!
//! Loading is a single forward pass: each physical line is tokenized,
//! classified into a [`Statement`](kizhi_common::Statement), and every
//! top-level `def` header is registered in the function table. Nothing is
//! executed or expanded here; the engine walks the line table lazily.
//!
//! # Usage
//!
//! ```
//! use kizhi_loader::{format, load};
//!
//! let program = load("def f\n    set a 5\ncall   f\n\nprint a").unwrap();
//! assert_eq!(program.len(), 4);
//! assert_eq!(program.functions.get("f"), Some(0));
//! assert_eq!(format(&program), "def f\n    set a 5\ncall f\nprint a\n");
//! ```
//!
//! # Structure rules
//!
//! - Blank and whitespace-only lines are dropped.
//! - A line starting with four spaces belongs to the body of the nearest
//!   preceding `def`; an indented line with no such header is rejected.
//! - `def` is only allowed at the top level.
//! - A later `def` of the same name replaces the earlier table entry.

pub mod error;

mod formatter;
mod lexer;
mod parser;

pub use error::LoadError;

use kizhi_common::{FunctionTable, Line, Program, Statement};
use lexer::tokenize_line;
use parser::parse_line;
use tracing::debug;

/// Load source text into a program.
///
/// Returns the first error encountered. Fix one error at a time.
pub fn load(source: &str) -> Result<Program, LoadError> {
    let mut lines = Vec::new();
    let mut functions = FunctionTable::new();
    let mut in_body = false;

    for (idx, text) in source.lines().enumerate() {
        let line_num = idx + 1;
        let tokenized = tokenize_line(text);
        let Some(statement) = parse_line(&tokenized.tokens, line_num)? else {
            continue;
        };

        if tokenized.indented {
            if !in_body {
                return Err(LoadError::UnexpectedIndent { line: line_num });
            }
            if matches!(statement, Statement::Def { .. }) {
                return Err(LoadError::NestedDef { line: line_num });
            }
        } else if let Statement::Def { name } = &statement {
            if let Some(previous) = functions.define(name.clone(), lines.len()) {
                debug!(function = %name, previous, line = line_num, "function redefined");
            }
            in_body = true;
        } else {
            in_body = false;
        }

        lines.push(Line::new(line_num, tokenized.indented, statement));
    }

    debug!(
        lines = lines.len(),
        functions = functions.len(),
        "program loaded"
    );
    Ok(Program::new(lines, functions))
}

/// Render a program as canonical source text.
///
/// One statement per line, single spaces between tokens, body lines
/// prefixed by exactly four spaces, trailing newline.
pub fn format(program: &Program) -> String {
    formatter::format(program)
}
