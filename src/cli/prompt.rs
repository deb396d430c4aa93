//! Line-based prompting for the interactive parts of `assess` and `checkin`
//!
//! Prompts go to stderr so stdout stays clean for `--format json`.

use anyhow::Result;
use console::style;
use std::io::{BufRead, Write};

pub(crate) struct Prompter<R> {
    input: R,
}

impl Prompter<std::io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{} ", style(prompt).bold())?;
        stderr.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(stderr)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn note(&self, message: &str) {
        eprintln!("  {}", style(message).yellow());
    }
}
