//! Program representation: an indexed table of classified source lines.
//!
//! The loader produces a [`Program`] once per `set code`; the engine walks
//! it lazily with a cursor and a call stack. Function bodies are not copied
//! anywhere; a function is just the index of its `def` line.

use std::collections::HashMap;
use std::ops::Range;

use crate::command::Statement;

/// Leading marker that places a line inside a function body.
pub const INDENT: &str = "    ";

/// A single non-blank source line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the original source text.
    pub number: usize,
    /// True if the line starts with [`INDENT`].
    pub indented: bool,
    /// What the line does.
    pub statement: Statement,
}

impl Line {
    /// Create a new line.
    pub fn new(number: usize, indented: bool, statement: Statement) -> Self {
        Self {
            number,
            indented,
            statement,
        }
    }
}

/// Function name to the line index of its `def` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTable {
    entries: HashMap<String, usize>,
}

impl FunctionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` at `def_index`. Returns the previous index if the
    /// name was already defined; the new definition replaces it.
    pub fn define(&mut self, name: impl Into<String>, def_index: usize) -> Option<usize> {
        self.entries.insert(name.into(), def_index)
    }

    /// Line index of the `def` header for `name`.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    /// Number of distinct function names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no functions are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, def_index)` pairs in ascending line order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(name, &idx)| (name.as_str(), idx))
            .collect();
        pairs.sort_by_key(|&(_, idx)| idx);
        pairs.into_iter()
    }
}

/// A loaded Kizhi program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Classified source lines, blank lines removed.
    pub lines: Vec<Line>,
    /// Function definitions, keyed by name.
    pub functions: FunctionTable,
}

impl Program {
    /// Create a program from already indexed parts.
    pub fn new(lines: Vec<Line>, functions: FunctionTable) -> Self {
        Self { lines, functions }
    }

    /// Number of lines in the program.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, if any.
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// True if `index` is inside the program and on an indented line.
    pub fn is_indented(&self, index: usize) -> bool {
        self.lines.get(index).is_some_and(|line| line.indented)
    }

    /// Line indices of the body that follows the header at `def_index`.
    ///
    /// The body is the run of indented lines directly after the header and
    /// may be empty.
    pub fn body(&self, def_index: usize) -> Range<usize> {
        let start = def_index + 1;
        let mut end = start;
        while self.is_indented(end) {
            end += 1;
        }
        start..end
    }

    /// Body range of the function called `name`.
    pub fn function_body(&self, name: &str) -> Option<Range<usize>> {
        self.functions.get(name).map(|idx| self.body(idx))
    }
}
