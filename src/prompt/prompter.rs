//! Line-based console prompting
//!
//! Generic over `BufRead`/`Write` so sessions can be driven from memory in
//! tests and from stdin/stdout in the binary.

use std::io::{BufRead, Write};

use super::{normalize, PromptError, Result};

/// Reads answers from `input`, writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink, for renderers that print between prompts
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `prompt` and read one raw line (without the line terminator)
    ///
    /// # Returns
    /// * `Err(PromptError::InputClosed)` - input reached end of file
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError::InputClosed);
        }

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(trimmed.to_string())
    }

    /// Ask until the answer matches one of `valid`
    ///
    /// Returns the matching member of `valid`. Invalid answers print the
    /// option list and re-prompt; there is no retry limit.
    pub fn ask_valid(&mut self, prompt: &str, valid: &[String]) -> Result<String> {
        loop {
            let answer = self.read_line(prompt)?;
            if let Some(token) = match_token(&answer, valid) {
                tracing::debug!(answer = %answer, token = %token, "accepted prompt answer");
                return Ok(token);
            }
            writeln!(
                self.output,
                "Sorry, that input was invalid. Please choose from {}.\n",
                valid.join(", ")
            )?;
        }
    }

    /// Ask a yes/no question until the normalized answer is exactly one of them
    pub fn ask_yes_no(&mut self, prompt: &str, invalid: &str) -> Result<bool> {
        loop {
            let answer = normalize(&self.read_line(prompt)?);
            match answer.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => writeln!(self.output, "{}", invalid)?,
            }
        }
    }
}

/// Match a raw answer against a token set
///
/// Accepts the normalized answer if it is a member, or a string of decimal
/// digits whose integer value is a member (`"03"` matches `"3"`).
pub fn match_token(raw: &str, valid: &[String]) -> Option<String> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let value = trimmed.trim_start_matches('0');
        let canonical = if value.is_empty() { "0" } else { value };
        return valid.iter().find(|v| v.as_str() == canonical).cloned();
    }

    let normalized = normalize(raw);
    valid.iter().find(|v| **v == normalized).cloned()
}
