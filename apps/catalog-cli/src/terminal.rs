//! # Terminal Prompts
//!
//! [`Prompter`] on top of dialoguer, for interactive use. Bad numbers are
//! caught by the input validator, so dialoguer keeps the question open and
//! shows the error under it instead of printing a new prompt line.
//!
//! ## Message Layout
//! ```text
//! "\n==== Product CRUD ====\n...\n0) Exit\nChoice: "
//!   └────────── printed as is ──────────┘ └ prompt ┘
//! ```
//! The trailing `": "` is dropped from the prompt label because the
//! dialoguer theme draws its own.

use std::io::{self, IsTerminal};

use dialoguer::console::Term;
use dialoguer::Input;

use crate::error::CliResult;
use crate::prompt::{optional, parse_float, parse_int, Prompter, INVALID_FLOAT, INVALID_INT};

/// Prompts drawn on stdout with dialoguer.
#[derive(Debug)]
pub struct TerminalPrompter {
    term: Term,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        TerminalPrompter::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
            term: Term::stdout(),
        }
    }

    /// True when both ends of the session are a terminal.
    pub fn is_available() -> bool {
        Term::stdout().is_term() && io::stdin().is_terminal()
    }

    /// Asks one question. `check` returns the message to show for a
    /// rejected answer.
    fn ask<F>(&mut self, message: &str, allow_empty: bool, check: F) -> CliResult<String>
    where
        F: FnMut(&String) -> Result<(), &'static str>,
    {
        let (header, label) = split_message(message);
        if let Some(header) = header {
            self.term.write_line(header)?;
        }

        let answer = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(allow_empty)
            .validate_with(check)
            .interact_text_on(&self.term)?;

        Ok(answer.trim().to_string())
    }

    /// Asks until the answer parses. The validator already rejects bad
    /// answers, so this normally returns on the first round.
    fn ask_parsed<T>(
        &mut self,
        message: &str,
        allow_empty: bool,
        parse: impl Fn(&str) -> Option<T>,
        invalid: &'static str,
    ) -> CliResult<T> {
        loop {
            let answer = self.ask(message, allow_empty, |raw| {
                number_check(raw.as_str(), &parse, invalid)
            })?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
        }
    }
}

impl Prompter for TerminalPrompter {
    fn say(&mut self, line: &str) -> CliResult<()> {
        self.term.write_line(line)?;
        Ok(())
    }

    fn prompt_line(&mut self, message: &str) -> CliResult<String> {
        self.ask(message, true, |_| Ok(()))
    }

    fn prompt_int(&mut self, message: &str) -> CliResult<i64> {
        self.ask_parsed(message, false, parse_int, INVALID_INT)
    }

    fn prompt_float(&mut self, message: &str) -> CliResult<f64> {
        self.ask_parsed(message, false, parse_float, INVALID_FLOAT)
    }

    fn prompt_optional_line(&mut self, message: &str) -> CliResult<Option<String>> {
        let answer = self.ask(message, true, |_| Ok(()))?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    fn prompt_optional_int(&mut self, message: &str) -> CliResult<Option<i64>> {
        self.ask_parsed(message, true, optional(parse_int), INVALID_INT)
    }

    fn prompt_optional_float(&mut self, message: &str) -> CliResult<Option<f64>> {
        self.ask_parsed(message, true, optional(parse_float), INVALID_FLOAT)
    }
}

/// Splits a prompt message into the lines printed above the prompt and the
/// label itself, without its trailing `": "`.
fn split_message(message: &str) -> (Option<&str>, &str) {
    let (header, last) = match message.rsplit_once('\n') {
        Some((header, last)) => (Some(header), last),
        None => (None, message),
    };
    (header, last.trim_end().trim_end_matches(':'))
}

fn number_check<T>(
    raw: &str,
    parse: &impl Fn(&str) -> Option<T>,
    invalid: &'static str,
) -> Result<(), &'static str> {
    parse(raw).map(|_| ()).ok_or(invalid)
}
