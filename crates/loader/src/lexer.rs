//! Tokenizer for Kizhi source lines.

use kizhi_common::INDENT;

/// The tokens of one line plus whether it sits inside a function body.
///
/// Tokens are kept as text. Whether a token is a name or a number depends
/// on its position, which only the parser knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenizedLine {
    pub(crate) indented: bool,
    pub(crate) tokens: Vec<String>,
}

/// Tokenize a single line of source text.
///
/// Tokens are the non-empty whitespace-separated pieces, so repeated
/// separators never shift operand positions. Returns no tokens for blank
/// lines.
pub(crate) fn tokenize_line(line: &str) -> TokenizedLine {
    TokenizedLine {
        indented: line.starts_with(INDENT),
        tokens: line.split_whitespace().map(str::to_string).collect(),
    }
}
