//! Parser for Kizhi tokens → statements.
//!
//! Dispatches on the keyword to the operand shape it requires. Names may
//! be any token; only the value position is read as an integer.

use crate::error::LoadError;
use kizhi_common::{Command, Keyword, Statement};

/// Parse the tokens of a single line into a statement.
///
/// Returns `Ok(None)` for blank lines (empty token list).
pub(crate) fn parse_line(tokens: &[String], line_num: usize) -> Result<Option<Statement>, LoadError> {
    let Some(mnemonic) = tokens.first() else {
        return Ok(None);
    };

    let keyword = Keyword::try_from(mnemonic.as_str()).map_err(|_| LoadError::UnknownKeyword {
        line: line_num,
        token: mnemonic.clone(),
    })?;

    let args = &tokens[1..];
    let name = expect_name(args, line_num, keyword)?;

    let statement = match keyword {
        // Shape: keyword + name
        Keyword::Def => Statement::Def { name },
        Keyword::Call => Statement::Call { name },
        Keyword::Rem => Command::Rem { name }.into(),
        Keyword::Print => Command::Print { name }.into(),

        // Shape: keyword + name + value
        Keyword::Set => {
            let value = expect_value(args, line_num, keyword)?;
            Command::Set { name, value }.into()
        }
        Keyword::Sub => {
            let value = expect_value(args, line_num, keyword)?;
            Command::Sub { name, value }.into()
        }
    };

    expect_end(&args[keyword.arity()..], line_num)?;
    Ok(Some(statement))
}

/// Expect a name at operand position 0.
fn expect_name(args: &[String], line_num: usize, keyword: Keyword) -> Result<String, LoadError> {
    args.first()
        .cloned()
        .ok_or_else(|| missing(line_num, keyword))
}

/// Expect a base-10 integer literal at operand position 1.
fn expect_value(args: &[String], line_num: usize, keyword: Keyword) -> Result<i64, LoadError> {
    let token = args.get(1).ok_or_else(|| missing(line_num, keyword))?;
    token.parse().map_err(|_| LoadError::InvalidNumber {
        line: line_num,
        token: token.clone(),
    })
}

/// Expect no more tokens.
fn expect_end(rest: &[String], line_num: usize) -> Result<(), LoadError> {
    match rest.first() {
        Some(extra) => Err(LoadError::UnexpectedToken {
            line: line_num,
            token: extra.clone(),
        }),
        None => Ok(()),
    }
}

fn missing(line_num: usize, keyword: Keyword) -> LoadError {
    LoadError::MissingArgument {
        line: line_num,
        keyword: keyword.mnemonic(),
        expected: keyword.arity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize_line;

    fn parse(text: &str) -> Result<Option<Statement>, LoadError> {
        parse_line(&tokenize_line(text).tokens, 1)
    }

    fn parse_ok(text: &str) -> Statement {
        parse(text).unwrap().unwrap()
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn all_shapes() {
        assert_eq!(
            parse_ok("set a 10"),
            Command::Set {
                name: "a".to_string(),
                value: 10
            }
            .into()
        );
        assert_eq!(
            parse_ok("sub a 4"),
            Command::Sub {
                name: "a".to_string(),
                value: 4
            }
            .into()
        );
        assert_eq!(
            parse_ok("rem a"),
            Command::Rem {
                name: "a".to_string()
            }
            .into()
        );
        assert_eq!(
            parse_ok("print a"),
            Command::Print {
                name: "a".to_string()
            }
            .into()
        );
        assert_eq!(
            parse_ok("def f"),
            Statement::Def {
                name: "f".to_string()
            }
        );
        assert_eq!(
            parse_ok("call f"),
            Statement::Call {
                name: "f".to_string()
            }
        );
    }

    #[test]
    fn non_positive_set_is_accepted_by_parser() {
        assert_eq!(
            parse_ok("set a 0"),
            Command::Set {
                name: "a".to_string(),
                value: 0
            }
            .into()
        );
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            parse("mul a 2").unwrap_err(),
            LoadError::UnknownKeyword {
                line: 1,
                token: "mul".to_string()
            }
        );
    }

    #[test]
    fn leading_number() {
        assert_eq!(
            parse("5 a").unwrap_err(),
            LoadError::UnknownKeyword {
                line: 1,
                token: "5".to_string()
            }
        );
    }

    #[test]
    fn missing_name() {
        assert_eq!(
            parse("print").unwrap_err(),
            LoadError::MissingArgument {
                line: 1,
                keyword: "print",
                expected: 1
            }
        );
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse("sub a").unwrap_err(),
            LoadError::MissingArgument {
                line: 1,
                keyword: "sub",
                expected: 2
            }
        );
    }

    #[test]
    fn word_where_value_expected() {
        assert_eq!(
            parse("set a b").unwrap_err(),
            LoadError::InvalidNumber {
                line: 1,
                token: "b".to_string()
            }
        );
    }

    #[test]
    fn names_may_start_with_digits() {
        assert_eq!(
            parse_ok("set 1x 5"),
            Command::Set {
                name: "1x".to_string(),
                value: 5
            }
            .into()
        );
        assert_eq!(
            parse_ok("print 5"),
            Command::Print {
                name: "5".to_string()
            }
            .into()
        );
    }

    #[test]
    fn signed_values() {
        assert_eq!(
            parse_ok("sub a -3"),
            Command::Sub {
                name: "a".to_string(),
                value: -3
            }
            .into()
        );
        assert_eq!(
            parse_ok("set a +3"),
            Command::Set {
                name: "a".to_string(),
                value: 3
            }
            .into()
        );
    }

    #[test]
    fn value_out_of_range() {
        assert_eq!(
            parse("set a 99999999999999999999999").unwrap_err(),
            LoadError::InvalidNumber {
                line: 1,
                token: "99999999999999999999999".to_string()
            }
        );
    }

    #[test]
    fn trailing_tokens() {
        assert_eq!(
            parse("print a b").unwrap_err(),
            LoadError::UnexpectedToken {
                line: 1,
                token: "b".to_string()
            }
        );
        assert_eq!(
            parse("set a 1 2").unwrap_err(),
            LoadError::UnexpectedToken {
                line: 1,
                token: "2".to_string()
            }
        );
    }
}
