//! Literal checks: every `set` must assign a natural number.

use crate::error::VerifyError;
use kizhi_common::{Command, Program, Statement};

/// Run the literal check.
pub fn check_literals(program: &Program) -> Vec<VerifyError> {
    program
        .lines
        .iter()
        .filter_map(|line| match &line.statement {
            Statement::Command(Command::Set { name, value }) if *value <= 0 => {
                Some(VerifyError::NonPositiveValue {
                    line: line.number,
                    name: name.clone(),
                    value: *value,
                })
            }
            _ => None,
        })
        .collect()
}
