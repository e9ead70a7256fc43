//! Console prompts with defaults.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Reads answers from `input` and writes prompts and results to `out`.
#[derive(Debug)]
pub(crate) struct Prompter<R, W> {
    input: R,
    /// Where prompts and tool output go.
    pub(crate) out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub(crate) fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Read a ticker symbol, upper-cased. `None` on blank input or end of input.
    pub(crate) fn symbol(&mut self) -> io::Result<Option<String>> {
        Ok(self
            .line("Enter stock symbol (e.g., AAPL): ")?
            .filter(|s| !s.is_empty())
            .map(|s| s.to_uppercase()))
    }

    /// Read a number, falling back to `default` on blank or malformed input.
    pub(crate) fn number<T>(&mut self, prompt: &str, default: T) -> io::Result<T>
    where
        T: FromStr + Copy + std::fmt::Display,
    {
        let Some(raw) = self.line(&format!("{} [{}]: ", prompt, default))? else {
            return Ok(default);
        };
        if raw.is_empty() {
            return Ok(default);
        }
        match raw.parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                writeln!(self.out, "Invalid number - using default.")?;
                Ok(default)
            }
        }
    }

    /// Read a comma-separated list, dropping blank entries.
    pub(crate) fn list(&mut self, prompt: &str) -> io::Result<Vec<String>> {
        Ok(self
            .line(prompt)?
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }
}
