//! Interactive shell
//!
//! Reads one textual command per input line, dispatches it, and prints
//! the rendered reply. The loop terminates on the sentinel END line or
//! at end of input.

use crate::dispatch::Dispatcher;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Sentinel line that terminates the read loop
pub const END_COMMAND: &str = "END";

/// Line-oriented shell over a dispatcher
pub struct Shell {
    /// Command dispatcher
    dispatcher: Dispatcher,
}

impl Shell {
    /// Create a new shell
    pub fn new() -> Self {
        Shell {
            dispatcher: Dispatcher::new(),
        }
    }

    /// Create a shell with specified engine capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Shell {
            dispatcher: Dispatcher::with_capacity(capacity),
        }
    }

    /// Run the read loop
    ///
    /// Reads commands from `input` until the END sentinel or end of
    /// input, writing one rendered reply line per printing command to
    /// `output`. Commands that print nothing produce no line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            if line == END_COMMAND {
                debug!("END received, stopping");
                break;
            }

            if let Some(text) = self.dispatcher.dispatch_line(line).render() {
                writeln!(output, "{}", text)?;
            }
        }

        Ok(())
    }

    /// Get reference to the dispatcher (for testing/inspection)
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut shell = Shell::new();
        let mut output = Vec::new();
        shell.run(Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_basic_session() {
        let output = run_script(
            "SET a 10\n\
             SET b 10\n\
             NUMEQUALTO 10\n\
             UNSET a\n\
             NUMEQUALTO 10\n\
             GET a\n\
             END\n",
        );
        assert_eq!(output, "2\n1\nNULL\n");
    }

    #[test]
    fn test_nested_transactions_session() {
        let output = run_script(
            "BEGIN\n\
             SET a 10\n\
             GET a\n\
             BEGIN\n\
             SET a 20\n\
             GET a\n\
             ROLLBACK\n\
             GET a\n\
             ROLLBACK\n\
             GET a\n\
             END\n",
        );
        assert_eq!(output, "10\n20\n10\nNULL\n");
    }

    #[test]
    fn test_commit_session() {
        let output = run_script(
            "BEGIN\n\
             SET a 30\n\
             BEGIN\n\
             SET a 40\n\
             COMMIT\n\
             GET a\n\
             ROLLBACK\n\
             END\n",
        );
        assert_eq!(output, "40\nNO TRANSACTION\n");
    }

    #[test]
    fn test_end_stops_processing() {
        let output = run_script(
            "SET a 10\n\
             END\n\
             GET a\n",
        );
        assert_eq!(output, "");
    }

    #[test]
    fn test_eof_without_end() {
        let output = run_script("SET a 10\nGET a\n");
        assert_eq!(output, "10\n");
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let output = run_script("FLUSH\nEND\n");
        assert_eq!(output, "***ERROR*** unknown command 'FLUSH'\n");
    }
}
