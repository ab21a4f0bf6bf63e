//! Keyword definitions for the Kizhi language.
//!
//! Keywords are matched case-sensitively; the language is lowercase only.

use std::fmt;

use crate::error::KeywordError;

/// The leading token of every source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Assign a natural number to a variable.
    Set,
    /// Subtract a literal from an existing variable.
    Sub,
    /// Remove a variable from memory.
    Rem,
    /// Write a variable's value to the output.
    Print,
    /// Begin a function definition.
    Def,
    /// Invoke a function.
    Call,
}

/// All keywords, in the order they are documented.
pub const ALL_KEYWORDS: [Keyword; 6] = [
    Keyword::Set,
    Keyword::Sub,
    Keyword::Rem,
    Keyword::Print,
    Keyword::Def,
    Keyword::Call,
];

impl TryFrom<&str> for Keyword {
    type Error = KeywordError;

    fn try_from(word: &str) -> Result<Self, Self::Error> {
        ALL_KEYWORDS
            .iter()
            .find(|kw| kw.mnemonic() == word)
            .copied()
            .ok_or_else(|| KeywordError::Unknown(word.to_string()))
    }
}

impl Keyword {
    /// Source text of this keyword.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Keyword::Set => "set",
            Keyword::Sub => "sub",
            Keyword::Rem => "rem",
            Keyword::Print => "print",
            Keyword::Def => "def",
            Keyword::Call => "call",
        }
    }

    /// Number of operand tokens that must follow the keyword.
    pub fn arity(&self) -> usize {
        match self {
            Keyword::Set | Keyword::Sub => 2,
            Keyword::Rem | Keyword::Print | Keyword::Def | Keyword::Call => 1,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
