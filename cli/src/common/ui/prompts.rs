//! # dsinit Confirmation Prompts
//!
//! File: cli/src/common/ui/prompts.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The scaffolder asks one question: whether to proceed when the target
//! directory already exists. The question goes through the `Confirm` trait so
//! the orchestrator never touches the console directly.
//!
//! - `ConsolePrompt<R, W>` writes the question to `W` and reads one line from
//!   `R`. `ConsolePrompt::stdio()` binds it to the terminal; tests bind it to
//!   in-memory buffers.
//! - `AssumeYes` answers affirmatively without any I/O (`--yes`).
//!
//! An answer counts as affirmative only if, with the line terminator removed
//! and lowercased, it is exactly `y`. End of input is a refusal.
//!
use crate::core::error::{Result, ScaffoldError};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A yes/no question put to the user.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Asks on a writer and reads the answer from a line-oriented reader.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for ConsolePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "{}", question)
            .and_then(|_| self.output.flush())
            .map_err(|e| ScaffoldError::Prompt(format!("could not write question: {}", e)))?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| ScaffoldError::Prompt(format!("could not read answer: {}", e)))?;
        if read == 0 {
            debug!("Prompt input closed before an answer was given");
            return Ok(false);
        }
        Ok(is_affirmative(&answer))
    }
}

/// Always answers yes.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        debug!("Auto-confirming: {}", question.trim());
        Ok(true)
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\n', '\r']).to_lowercase() == "y"
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let answer = ConsolePrompt::new(Cursor::new(input.as_bytes()), &mut output)
            .confirm("Overwrite? (y/n): ")
            .unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(ask("y\n").0);
        assert!(ask("Y\n").0);
        assert!(ask("y\r\n").0);
        assert!(ask("y").0);
    }

    #[test]
    fn test_everything_else_declines() {
        for input in ["n\n", "yes\n", " y\n", "y \n", "\n", "nope"] {
            assert!(!ask(input).0, "{input:?} should decline");
        }
    }

    #[test]
    fn test_end_of_input_declines() {
        assert!(!ask("").0);
    }

    #[test]
    fn test_question_is_written() {
        let (_, written) = ask("n\n");
        assert_eq!(written, "Overwrite? (y/n): ");
    }

    #[test]
    fn test_assume_yes() {
        assert!(AssumeYes.confirm("anything").unwrap());
    }
}
