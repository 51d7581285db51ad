//! Session loop
//!
//! filters → load → preview → statistics → "restart?", repeated until the
//! user answers anything other than yes or input ends. A filter that matches
//! no trips ends the session with an error.

use std::io::{BufRead, Write};

use crate::cli::{Error, Result};
use crate::config::Config;
use crate::dataset::{load_city, DatasetError};
use crate::prompt::{collect_filters, preview, PromptError, Prompter};
use crate::stats::{report, OutputFormat};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// One interactive session over a config
pub struct Session<'a, R, W> {
    config: &'a Config,
    prompter: Prompter<R, W>,
    format: OutputFormat,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a Config, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            config,
            prompter: Prompter::new(input, output),
            format,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_inner().1
    }

    /// Run until the user stops
    ///
    /// # Returns
    /// * `Ok(n)` - number of completed iterations
    /// * `Err(Error)` - fatal configuration or data error, including a
    ///   filter that matches no trips
    pub fn run(&mut self) -> Result<usize> {
        let mut completed = 0;

        loop {
            match self.run_once() {
                Ok(()) => completed += 1,
                Err(Error::Prompt(PromptError::InputClosed)) => {
                    tracing::debug!(completed, "input closed, ending session");
                    return Ok(completed);
                }
                Err(e) => return Err(e),
            }

            match self.prompter.read_line(RESTART_PROMPT) {
                Ok(answer) if is_restart(&answer) => continue,
                Ok(_) | Err(PromptError::InputClosed) => return Ok(completed),
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// One pass of the pipeline
    pub fn run_once(&mut self) -> Result<()> {
        let request = collect_filters(&mut self.prompter, self.config)?;
        let data = load_city(self.config, &request)?;

        if data.is_empty() {
            return Err(DatasetError::NoMatches {
                filter: request.describe(),
            }
            .into());
        }

        preview(&mut self.prompter, &data, self.config.page_size)?;
        report(self.prompter.output(), &data, self.format)?;
        Ok(())
    }
}

/// Only a literal "yes" (any case, surrounding whitespace ignored) restarts
fn is_restart(answer: &str) -> bool {
    answer.trim().to_lowercase() == "yes"
}
