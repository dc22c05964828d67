//! Line-based interactive prompting

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::error::FatalError;

/// One question at a time, answered with one line of input
pub trait Prompter {
    /// Print `question` and block until a line is entered
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Report a rejected answer or a recoverable problem
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Report progress
    fn info(&mut self, message: &str) -> Result<()>;

    /// Ask a y/n question. `None` means the answer was neither and a
    /// warning has already been shown.
    fn ask_yes_no(&mut self, question: &str) -> Result<Option<bool>> {
        let answer = self.ask(&format!("{}\n(y/n): ", question))?;
        let parsed = parse_yes_no(&answer);
        if parsed.is_none() {
            self.warn("Wrong input. Please use y for Yes and n for No.")?;
        }
        Ok(parsed)
    }
}

/// Accepts y/yes/n/no, ignoring case and surrounding whitespace
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if input.eq_ignore_ascii_case("n") || input.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// Prompter over any line reader and writer (stdin/stdout in the binary)
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer (tests inspect what was printed)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        if !question.ends_with(": ") {
            writeln!(self.output)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FatalError::InputClosed.into());
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {}", "Warning:".yellow().bold(), message)?;
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{output_of, scripted};
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no(" YES "), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut prompter = LinePrompter::new(Cursor::new(b"My Comic\r\n".to_vec()), Vec::new());
        assert_eq!(prompter.ask("Name?").unwrap(), "My Comic");
    }

    #[test]
    fn test_ask_on_closed_input() {
        let mut prompter = LinePrompter::new(Cursor::new(Vec::new()), Vec::new());
        let err = prompter.ask("Name?").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FatalError>(),
            Some(FatalError::InputClosed)
        ));
    }

    #[test]
    fn test_yes_no_warns_on_garbage() {
        let mut prompter = scripted(&["perhaps", "y"]);
        assert_eq!(prompter.ask_yes_no("Continue?").unwrap(), None);
        assert_eq!(prompter.ask_yes_no("Continue?").unwrap(), Some(true));
        let out = output_of(prompter);
        assert!(out.contains("Please use y for Yes and n for No."));
        assert!(out.contains("(y/n): "));
    }
}
