use std::{
    fmt,
    io::{self, BufRead, Write},
};

use crate::types::{Centavos, format_centavos};

/// Ways a prompt can fail to produce a value.
#[derive(Debug)]
pub enum InputError {
    /// The input stream ended.
    Eof,
    /// Reading or writing the console failed.
    Io(io::Error),
}

impl From<io::Error> for InputError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "input ended"),
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Result of a console prompt.
pub type InputResult<T> = Result<T, InputError>;

/// Prompt-and-validate loops over any line reader and writer.
///
/// Invalid entries print a message and re-prompt; only end of input or an
/// i/o failure escapes as an error.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the reader and the writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl fmt::Display) -> InputResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and returns the next trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> InputResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompts until the trimmed line is not empty.
    pub fn read_nonempty(&mut self, prompt: &str) -> InputResult<String> {
        loop {
            let line = self.read_line(prompt)?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.say("Invalid input. Please enter a non-empty string.")?;
        }
    }

    /// Re-prompts until the line is an integer in `min..=max`.
    pub fn read_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> InputResult<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<i64>() {
                Ok(v) if (min..=max).contains(&v) => return Ok(v),
                Ok(_) if max == i64::MAX => {
                    self.say(format!(
                        "Invalid input. Please enter an integer greater than or equal to {min}."
                    ))?;
                }
                Ok(_) => {
                    self.say(format!(
                        "Invalid input. Please enter an integer between {min} and {max}."
                    ))?;
                }
                Err(_) => self.say("Sorry! Please enter an integer.")?,
            }
        }
    }

    /// Re-prompts until the line is an amount of at least `min` centavos.
    pub fn read_money_at_least(&mut self, prompt: &str, min: Centavos) -> InputResult<Centavos> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_money(&line) {
                Some(v) if v >= min => return Ok(v),
                Some(_) => {
                    self.say(format!(
                        "Invalid input. Please enter an amount greater than or equal to {}.",
                        format_centavos(min)
                    ))?;
                }
                None => self.say("Invalid input. Please enter an amount.")?,
            }
        }
    }

    /// Re-prompts until the line matches one of `options` exactly.
    pub fn read_choice(&mut self, prompt: &str, options: &[&str]) -> InputResult<String> {
        loop {
            let line = self.read_line(prompt)?;
            if options.contains(&line.as_str()) {
                return Ok(line);
            }
            self.say("Invalid choice. Please try again.")?;
        }
    }

    /// True only for `Y`/`y`.
    pub fn confirm(&mut self, prompt: &str) -> InputResult<bool> {
        let line = self.read_line(prompt)?;
        Ok(line.eq_ignore_ascii_case("y"))
    }
}

/// Parses a decimal peso amount into centavos, rounding to the nearest
/// centavo.
pub fn parse_money(text: &str) -> Option<Centavos> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let centavos = (value * 100.0).round();
    if centavos.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }
    Some(centavos as Centavos)
}
