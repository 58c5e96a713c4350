//! Line-oriented console used by the session.
//!
//! The console owns the input stream for the whole session. Integer prompts
//! read the next non-blank line and take its first token; anything after the
//! token is discarded along with the rest of the line, and so is a token that
//! fails to parse. Closing the console releases the input and prints the
//! termination line exactly once, whether the session ends normally or not.

use colored::Colorize;
use std::io::{BufRead, Write};

use crate::error::{Result, ResultsError};

pub const TERMINATION_MESSAGE: &str = "Input closed. Program terminated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Failure,
}

pub struct Console<R: BufRead, W: Write> {
    input: Option<R>,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input: Some(input),
            output,
            color,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.input.is_none()
    }

    /// Writes a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        self.say_with(text, Tone::Plain)
    }

    pub fn say_with(&mut self, text: &str, tone: Tone) -> Result<()> {
        let line = match (self.color, tone) {
            (false, _) | (true, Tone::Plain) => text.to_string(),
            (true, Tone::Success) => text.green().to_string(),
            (true, Tone::Failure) => text.red().to_string(),
        };
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line without its line terminator. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> Result<String> {
        let input = self.input.as_mut().ok_or(ResultsError::InputClosed)?;

        let mut buf = Vec::new();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| ResultsError::io_error("reading input", e))?;
        if read == 0 {
            return Err(ResultsError::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Reads an integer token, skipping blank lines the way a token scanner does.
    pub fn read_int(&mut self) -> Result<i32> {
        loop {
            let line = self.read_line()?;
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            return token
                .parse::<i32>()
                .map_err(|_| ResultsError::invalid_integer(token));
        }
    }

    /// Releases the input stream and announces termination. Later calls do nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.input.take().is_some() {
            tracing::debug!("Console input released");
            writeln!(self.output, "{TERMINATION_MESSAGE}")?;
            self.output.flush()?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Drop for Console<R, W> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "Failed to close console cleanly");
        }
    }
}
