//! Prompt / parse / compute / print loop
//!
//! One cycle prints the banner, acquires the first operand, the operator and
//! the second operand, then prints either the result line or the
//! division-by-zero error.
//!
//! Invalid input triggers a retry-or-abort question. Answering `n` abandons
//! the whole calculation and the loop starts over at the banner; no
//! placeholder operand is ever fed into the arithmetic.
//!
//! The quit token ends the session at any operand or operator prompt. End of
//! input is treated the same way.

use crate::error::{CalcError, Result};
use crate::input::{is_quit, TokenSource};
use crate::messages::{Locale, Messages};
use crate::number::parse_number;
use crate::operation::{Calculation, Operator};
use std::io::Write;
use tracing::{debug, info, warn};

/// Why the session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// User typed the quit token
    Quit,
    /// Input stream was exhausted
    EndOfInput,
}

/// Counters for one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Result lines printed
    pub completed: u64,
    /// Calculations rejected for dividing by zero
    pub division_errors: u64,
    /// Calculations abandoned from the retry prompt
    pub abandoned: u64,
}

/// Outcome of acquiring one field
enum Step<T> {
    Value(T),
    Stop(Stop),
}

enum Stop {
    /// Abandon the current calculation and start a new cycle
    Restart,
    Exit(Exit),
}

/// Interactive calculator session over an injected token source and sink
pub struct Session<S, W> {
    source: S,
    out: W,
    messages: &'static Messages,
    show_banner: bool,
    stats: SessionStats,
}

impl<S: TokenSource, W: Write> Session<S, W> {
    pub fn new(source: S, out: W, locale: Locale) -> Self {
        Self {
            source,
            out,
            messages: locale.messages(),
            show_banner: true,
            stats: SessionStats::default(),
        }
    }

    /// Enable or disable the menu banner printed at the start of each cycle
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Consume the session and hand back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run cycles until the user quits or input ends.
    ///
    /// Only I/O failures are returned as errors; bad input and division by
    /// zero are handled interactively.
    pub fn run(&mut self) -> Result<Exit> {
        loop {
            if let Some(exit) = self.run_cycle()? {
                let stats = self.stats;
                info!(
                    reason = ?exit,
                    completed = stats.completed,
                    division_errors = stats.division_errors,
                    abandoned = stats.abandoned,
                    "session finished"
                );
                let goodbye = self.messages.goodbye;
                self.say(goodbye)?;
                return Ok(exit);
            }
        }
    }

    /// Run a single calculation cycle. `Some(exit)` ends the session.
    pub fn run_cycle(&mut self) -> Result<Option<Exit>> {
        let messages = self.messages;
        self.print_banner()?;

        let lhs = match self.acquire(
            messages.first_number_prompt,
            messages.invalid_number,
            parse_number,
        )? {
            Step::Value(v) => v,
            Step::Stop(stop) => return Ok(self.stop(stop)),
        };

        let operator = match self.acquire(
            messages.operator_prompt,
            messages.invalid_operator,
            Operator::from_token,
        )? {
            Step::Value(op) => op,
            Step::Stop(stop) => return Ok(self.stop(stop)),
        };

        let rhs = match self.acquire(
            messages.second_number_prompt,
            messages.invalid_number,
            parse_number,
        )? {
            Step::Value(v) => v,
            Step::Stop(stop) => return Ok(self.stop(stop)),
        };

        match Calculation::evaluate(lhs, operator, rhs) {
            Ok(calc) => {
                self.say(&calc.render(messages.result_label))?;
                self.stats.completed += 1;
            },
            Err(CalcError::DivisionByZero) => {
                warn!(lhs, "division by zero rejected");
                self.say(&messages.error_line(messages.division_by_zero))?;
                self.stats.division_errors += 1;
            },
            Err(e) => return Err(e),
        }

        Ok(None)
    }

    fn stop(&mut self, stop: Stop) -> Option<Exit> {
        match stop {
            Stop::Restart => {
                debug!("calculation abandoned, restarting");
                self.stats.abandoned += 1;
                None
            },
            Stop::Exit(exit) => Some(exit),
        }
    }

    fn print_banner(&mut self) -> Result<()> {
        if !self.show_banner {
            return Ok(());
        }
        let messages = self.messages;
        writeln!(self.out)?;
        self.say(messages.title)?;
        self.say(messages.quit_hint)
    }

    /// Prompt until `parse` accepts a token, the user gives up, or quits
    fn acquire<T>(
        &mut self,
        prompt: &str,
        reason: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Step<T>> {
        loop {
            self.say(prompt)?;

            let Some(token) = self.source.next_token()? else {
                debug!("end of input at prompt");
                return Ok(Step::Stop(Stop::Exit(Exit::EndOfInput)));
            };

            if is_quit(&token) {
                debug!("quit requested");
                return Ok(Step::Stop(Stop::Exit(Exit::Quit)));
            }

            match parse(&token) {
                Ok(value) => return Ok(Step::Value(value)),
                Err(e) if e.is_input_error() => {
                    debug!(token = %token, error = %e, "input rejected");
                    match self.ask_retry(reason)? {
                        Some(true) => continue,
                        Some(false) => return Ok(Step::Stop(Stop::Restart)),
                        None => return Ok(Step::Stop(Stop::Exit(Exit::EndOfInput))),
                    }
                },
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask whether to retry. `None` when input ends before an answer.
    fn ask_retry(&mut self, reason: &str) -> Result<Option<bool>> {
        let messages = self.messages;
        self.say(&messages.retry_line(reason))?;

        loop {
            let Some(response) = self.source.next_token()? else {
                return Ok(None);
            };
            match response.to_lowercase().as_str() {
                "y" => return Ok(Some(true)),
                "n" => return Ok(Some(false)),
                _ => {
                    debug!(response = %response, "unrecognized retry answer");
                    self.say(messages.retry_reprompt)?;
                },
            }
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}
