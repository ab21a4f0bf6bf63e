//! Canonical source rendering for loaded programs.

use kizhi_common::{Program, INDENT};

/// Render a program as canonical source text.
pub(crate) fn format(program: &Program) -> String {
    let mut out = String::new();
    for line in &program.lines {
        if line.indented {
            out.push_str(INDENT);
        }
        out.push_str(&line.statement.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kizhi_common::{Command, FunctionTable, Line, Statement};

    #[test]
    fn empty_program_formats_to_empty_text() {
        assert_eq!(format(&Program::default()), "");
    }

    #[test]
    fn body_lines_get_the_indent_marker() {
        let program = Program::new(
            vec![
                Line::new(
                    1,
                    false,
                    Statement::Def {
                        name: "f".to_string(),
                    },
                ),
                Line::new(
                    2,
                    true,
                    Command::Set {
                        name: "a".to_string(),
                        value: 1,
                    }
                    .into(),
                ),
                Line::new(
                    3,
                    false,
                    Statement::Call {
                        name: "f".to_string(),
                    },
                ),
            ],
            FunctionTable::new(),
        );
        assert_eq!(format(&program), "def f\n    set a 1\ncall f\n");
    }
}
