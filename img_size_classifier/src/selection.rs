//! Interactive threshold prompt.

use crate::error::{ClassifierError, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const PROMPT: &str = "> Enter a percent value (1 to 100) or enter 0 to finish: ";
pub const RETRY_HINT: &str = "Please, enter a NUMBER between 0 and 100";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Operator entered 0.
    Finish,
    /// Export images at or above this percentile (1..=100).
    Threshold(u8),
}

/// Parse one line of operator input. Surrounding whitespace is ignored.
pub fn parse_selection(input: &str) -> Result<Selection> {
    let trimmed = input.trim();
    let invalid = || ClassifierError::InputParse {
        input: trimmed.to_string(),
    };

    let value: i64 = trimmed.parse().map_err(|_| invalid())?;
    match value {
        0 => Ok(Selection::Finish),
        1..=100 => Ok(Selection::Threshold(value as u8)),
        _ => Err(invalid()),
    }
}

/// Reads selections from `input`, writing the prompt and hints to `output`.
pub struct SelectionPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SelectionPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt until a valid value arrives.
    ///
    /// Invalid input re-prompts. End of input is reported as
    /// [`ClassifierError::Interrupted`].
    pub fn next_selection(&mut self) -> Result<Selection> {
        loop {
            write!(self.output, "{}", PROMPT).map_err(Self::stdout_error)?;
            self.output.flush().map_err(Self::stdout_error)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| ClassifierError::io("reading", "stdin", e))?;
            if read == 0 {
                warn!("Prompt input closed");
                return Err(ClassifierError::Interrupted);
            }

            match parse_selection(&line) {
                Ok(selection) => {
                    debug!(?selection, "Operator selection");
                    return Ok(selection);
                }
                Err(e) if !e.category().is_fatal() => {
                    debug!(error = %e, "Rejected operator input");
                    writeln!(self.output, "{}", RETRY_HINT).map_err(Self::stdout_error)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn stdout_error(e: std::io::Error) -> ClassifierError {
        ClassifierError::io("writing", "stdout", e)
    }
}
