//! I/O boundary traits for testability
//!
//! These traits abstract terminal interaction, allowing the interactive
//! session to be driven by scripted input in tests.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Line-oriented terminal abstraction.
pub trait Console {
    /// Read one line without its line terminator. `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Show a prompt label; the answer is read with `read_line`.
    fn prompt(&mut self, label: &str) -> io::Result<()>;

    /// Write a plain output line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write pre-rendered text that already carries its line endings.
    fn write_block(&mut self, block: &str) -> io::Result<()> {
        for line in block.lines() {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Write a confirmation message.
    fn success(&mut self, msg: &str) -> io::Result<()>;

    /// Write an error message.
    fn error(&mut self, msg: &str) -> io::Result<()>;
}

/// Strip a single trailing `\n` or `\r\n`, nothing else.
pub fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Real console on stdin/stdout with colored output.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(buf)))
    }

    fn prompt(&mut self, label: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{} ", label.cyan())?;
        out.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }

    fn success(&mut self, msg: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{} {}", "✓".green(), msg)
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{}: {}", "error".red().bold(), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_crlf_line_when_stripping_then_only_terminator_removed() {
        assert_eq!(strip_line_ending(" Leo \r\n".to_string()), " Leo ");
        assert_eq!(strip_line_ending("Leo".to_string()), "Leo");
        assert_eq!(strip_line_ending("\n".to_string()), "");
    }
}
