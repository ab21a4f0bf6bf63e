//! Kizhi common types: the program model shared by every crate.
//!
//! This crate provides the foundational data structures for the Kizhi
//! language:
//!
//! - [`Keyword`] — the six keywords (`set`, `sub`, `rem`, `print`, `def`, `call`)
//! - [`Command`] — the closed set of primitive commands
//! - [`Statement`] — what a single source line means
//! - [`Line`] — a classified source line with its indentation and position
//! - [`FunctionTable`] — function name to definition line index
//! - [`Program`] — the indexed line table the engine walks
//!
//! # Dependencies
//!
//! This crate uses `thiserror` for its single error type and has no other
//! dependencies.

pub mod command;
pub mod error;
pub mod keyword;
pub mod program;

// Re-export commonly used types at the crate root.
pub use command::{Command, Statement};
pub use error::KeywordError;
pub use keyword::Keyword;
pub use program::{FunctionTable, Line, Program, INDENT};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a random keyword.
    fn arb_keyword() -> impl Strategy<Value = Keyword> {
        prop::sample::select(keyword::ALL_KEYWORDS.to_vec())
    }

    proptest! {
        /// Every keyword resolves back from its own mnemonic.
        #[test]
        fn keyword_mnemonic_resolves(kw in arb_keyword()) {
            prop_assert_eq!(Keyword::try_from(kw.mnemonic()), Ok(kw));
        }

        /// Arbitrary words either resolve to a keyword with the same
        /// mnemonic or produce `KeywordError::Unknown` carrying the word.
        #[test]
        fn arbitrary_word_resolves_or_errors(word in "[a-z]{1,8}") {
            match Keyword::try_from(word.as_str()) {
                Ok(kw) => prop_assert_eq!(kw.mnemonic(), word.as_str()),
                Err(KeywordError::Unknown(w)) => prop_assert_eq!(w, word),
            }
        }

        /// A command's display form always starts with its keyword and
        /// names its variable as the second token.
        #[test]
        fn command_display_tokens(name in "[a-z][a-z0-9_]{0,6}", value in any::<i64>()) {
            let cmd = Command::Sub { name: name.clone(), value };
            let text = cmd.to_string();
            let tokens: Vec<&str> = text.split(' ').collect();
            prop_assert_eq!(tokens.len(), 3);
            prop_assert_eq!(tokens[0], "sub");
            prop_assert_eq!(tokens[1], name.as_str());
            prop_assert_eq!(tokens[2].parse::<i64>().unwrap(), value);
        }
    }
}
