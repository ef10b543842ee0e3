//! # Prompts
//!
//! Everything the session asks the user goes through [`Prompter`]. There are
//! two implementations:
//!
//! - [`TerminalPrompter`](crate::terminal::TerminalPrompter): dialoguer
//!   prompts, used when the binary runs attached to a terminal
//! - [`Console`]: plain lines over any `BufRead` / `Write` pair, used for
//!   piped input and for driving whole sessions from a script in tests
//!
//! ## Re-prompt Rules
//! ```text
//! prompt_int      "abc"  ──► "Enter a valid integer number" ──► ask again
//! prompt_float    "9,90" ──► 9.9   (comma or dot as decimal separator)
//! prompt_float    "inf"  ──► "Enter a number (use dot or comma)" ──► ask again
//! prompt_optional ""     ──► None  (keep current value)
//! any prompt      bytes that are not UTF-8 ──► "Enter valid text" ──► ask again
//! any prompt      EOF    ──► CliError::InputClosed
//! ```

use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::{CliError, CliResult};

pub(crate) const INVALID_INT: &str = "Enter a valid integer number";
pub(crate) const INVALID_FLOAT: &str = "Enter a number (use dot or comma)";
const INVALID_TEXT: &str = "Enter valid text";

/// Parses an integer, ignoring surrounding whitespace.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parses a decimal number accepting `,` as the decimal separator.
///
/// Only finite values are accepted: `inf` and `NaN` cannot be priced.
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Questions the session can ask.
///
/// Messages are written the way they appear in a plain terminal,
/// e.g. `"Price: "`. Implementations that draw their own prompt decoration
/// are free to reformat them.
pub trait Prompter {
    /// Prints one line.
    fn say(&mut self, line: &str) -> CliResult<()>;

    /// Reads free text, trimmed.
    fn prompt_line(&mut self, message: &str) -> CliResult<String>;

    /// Reads an integer, asking again until one parses.
    fn prompt_int(&mut self, message: &str) -> CliResult<i64>;

    /// Reads a finite decimal number, asking again until one parses.
    fn prompt_float(&mut self, message: &str) -> CliResult<f64>;

    /// Reads free text; an empty answer means "keep", i.e. `None`.
    fn prompt_optional_line(&mut self, message: &str) -> CliResult<Option<String>>;

    /// Like [`prompt_int`](Self::prompt_int), but an empty answer yields `None`.
    fn prompt_optional_int(&mut self, message: &str) -> CliResult<Option<i64>>;

    /// Like [`prompt_float`](Self::prompt_float), but an empty answer yields `None`.
    fn prompt_optional_float(&mut self, message: &str) -> CliResult<Option<f64>>;
}

/// Line-based prompts over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Gives back the output sink (used by tests to inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `message` without a newline and reads one raw line.
    ///
    /// A line that is not valid UTF-8 is rejected and asked again.
    fn read_line(&mut self, message: &str) -> CliResult<String> {
        loop {
            write!(self.output, "{message}")?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(CliError::InputClosed);
            }

            match String::from_utf8(buf) {
                Ok(line) => return Ok(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(e) => {
                    warn!(error = %e.utf8_error(), "rejected input that is not UTF-8");
                    self.say(INVALID_TEXT)?;
                }
            }
        }
    }

    /// Reads until `parse` accepts the answer, printing `invalid` after
    /// each rejected one.
    fn read_parsed<T>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Option<T>,
        invalid: &str,
    ) -> CliResult<T> {
        loop {
            let raw = self.read_line(message)?;
            match parse(&raw) {
                Some(value) => return Ok(value),
                None => {
                    warn!(input = %raw, "rejected input");
                    self.say(invalid)?;
                }
            }
        }
    }
}

/// Wraps a parser so that an empty answer is accepted as `None`.
pub(crate) fn optional<T>(parse: fn(&str) -> Option<T>) -> impl Fn(&str) -> Option<Option<T>> {
    move |raw: &str| {
        if raw.trim().is_empty() {
            Some(None)
        } else {
            parse(raw).map(Some)
        }
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn say(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn prompt_line(&mut self, message: &str) -> CliResult<String> {
        Ok(self.read_line(message)?.trim().to_string())
    }

    fn prompt_int(&mut self, message: &str) -> CliResult<i64> {
        self.read_parsed(message, parse_int, INVALID_INT)
    }

    fn prompt_float(&mut self, message: &str) -> CliResult<f64> {
        self.read_parsed(message, parse_float, INVALID_FLOAT)
    }

    fn prompt_optional_line(&mut self, message: &str) -> CliResult<Option<String>> {
        let line = self.prompt_line(message)?;
        Ok((!line.is_empty()).then_some(line))
    }

    fn prompt_optional_int(&mut self, message: &str) -> CliResult<Option<i64>> {
        self.read_parsed(message, optional(parse_int), INVALID_INT)
    }

    fn prompt_optional_float(&mut self, message: &str) -> CliResult<Option<f64>> {
        self.read_parsed(message, optional(parse_float), INVALID_FLOAT)
    }
}
