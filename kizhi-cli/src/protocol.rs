//! Framing of a line stream into protocol messages.
//!
//! A line source cannot carry a multi-line program in one line, so the
//! lines between `set code` and `end code` are joined into a single
//! message. End of input also closes an open program.

use std::io::{self, BufRead};

use kizhi_vm::session::SET_CODE;

/// Closes the program text opened by `set code`.
pub(crate) const END_CODE: &str = "end code";

/// Messages framed from a line reader, yielded as soon as each one is
/// complete.
pub(crate) struct Messages<R> {
    lines: io::Lines<R>,
    /// Program lines collected since `set code`.
    source: Option<Vec<String>>,
    /// `end code` waiting behind the program it closed.
    pending: Option<String>,
}

/// Split `reader` into the messages an
/// [`Interpreter`](kizhi_vm::Interpreter) expects.
pub(crate) fn frame_messages<R: BufRead>(reader: R) -> Messages<R> {
    Messages {
        lines: reader.lines(),
        source: None,
        pending: None,
    }
}

impl<R: BufRead> Iterator for Messages<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(message) = self.pending.take() {
            return Some(Ok(message));
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return Some(Err(e)),
                None => return self.source.take().map(|buf| Ok(buf.join("\n"))),
            };

            match self.source.take() {
                Some(buf) if line.trim() == END_CODE => {
                    self.pending = Some(END_CODE.to_string());
                    return Some(Ok(buf.join("\n")));
                }
                Some(mut buf) => {
                    buf.push(line);
                    self.source = Some(buf);
                }
                None if line.trim() == SET_CODE => {
                    self.source = Some(Vec::new());
                    return Some(Ok(SET_CODE.to_string()));
                }
                None => return Some(Ok(line)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Read};

    fn frame(input: &str) -> Vec<String> {
        frame_messages(input.as_bytes())
            .collect::<io::Result<_>>()
            .unwrap()
    }

    /// A reader that fails once the data before it is used up.
    struct Disconnected;

    impl Read for Disconnected {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer gone"))
        }
    }

    #[test]
    fn joins_program_lines() {
        assert_eq!(
            frame("set code\nset a 1\nprint a\nend code\nrun\n"),
            vec!["set code", "set a 1\nprint a", "end code", "run"]
        );
    }

    #[test]
    fn keeps_body_indentation() {
        assert_eq!(
            frame("set code\ndef f\n    print a\nend code\n"),
            vec!["set code", "def f\n    print a", "end code"]
        );
    }

    #[test]
    fn run_inside_program_is_program_text() {
        assert_eq!(
            frame("set code\nrun\nend code\n"),
            vec!["set code", "run", "end code"]
        );
    }

    #[test]
    fn end_of_input_closes_program() {
        assert_eq!(frame("set code\nset a 1"), vec!["set code", "set a 1"]);
    }

    #[test]
    fn empty_program() {
        assert_eq!(frame("set code\nend code\n"), vec!["set code", "", "end code"]);
    }

    #[test]
    fn other_lines_pass_through() {
        assert_eq!(frame("hello\nrun\n"), vec!["hello", "run"]);
    }

    #[test]
    fn messages_arrive_before_input_ends() {
        let input = "set code\nset a 1\nend code\nrun\n".as_bytes().chain(Disconnected);
        let mut messages = frame_messages(BufReader::new(input));

        assert_eq!(messages.next().unwrap().unwrap(), "set code");
        assert_eq!(messages.next().unwrap().unwrap(), "set a 1");
        assert_eq!(messages.next().unwrap().unwrap(), "end code");
        assert_eq!(messages.next().unwrap().unwrap(), "run");
        let err = messages.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
    }
}
