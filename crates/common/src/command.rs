//! Primitive commands and line statements.

use std::fmt;

use crate::keyword::Keyword;

/// One of the four operations applied to the variable store.
///
/// Values are kept exactly as written in the source. Whether a `Set`
/// value is a natural number is checked by the engine at commit time,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// `set <name> <value>`
    Set { name: String, value: i64 },
    /// `sub <name> <value>`
    Sub { name: String, value: i64 },
    /// `rem <name>`
    Rem { name: String },
    /// `print <name>`
    Print { name: String },
}

impl Command {
    /// The keyword this command was written with.
    pub fn keyword(&self) -> Keyword {
        match self {
            Command::Set { .. } => Keyword::Set,
            Command::Sub { .. } => Keyword::Sub,
            Command::Rem { .. } => Keyword::Rem,
            Command::Print { .. } => Keyword::Print,
        }
    }

    /// Name of the variable the command targets.
    pub fn variable(&self) -> &str {
        match self {
            Command::Set { name, .. }
            | Command::Sub { name, .. }
            | Command::Rem { name }
            | Command::Print { name } => name,
        }
    }

    /// The literal operand, if this command shape carries one.
    pub fn value(&self) -> Option<i64> {
        match self {
            Command::Set { value, .. } | Command::Sub { value, .. } => Some(*value),
            Command::Rem { .. } | Command::Print { .. } => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{} {} {}", self.keyword(), self.variable(), value),
            None => write!(f, "{} {}", self.keyword(), self.variable()),
        }
    }
}

/// The meaning of a single source line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    /// Function header: `def <name>`.
    Def { name: String },
    /// Function invocation: `call <name>`.
    Call { name: String },
    /// A primitive command.
    Command(Command),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Def { name } => write!(f, "def {name}"),
            Statement::Call { name } => write!(f, "call {name}"),
            Statement::Command(cmd) => fmt::Display::fmt(cmd, f),
        }
    }
}

impl From<Command> for Statement {
    fn from(cmd: Command) -> Self {
        Statement::Command(cmd)
    }
}
