//! CLI argument parsing
//!
//! Options only; every filter parameter is collected interactively.
//!
//! ```text
//! bikeshare [--config <path>] [--data-dir <dir>] [--json]
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::stats::OutputFormat;

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "bikeshare",
    version,
    about = "Explore US bike-share trip data for Chicago, New York and Washington"
)]
pub struct Args {
    /// Config file (default: $BIKESHARE_CONFIG, then ./bikeshare.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the city CSV files (overrides the config)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print statistics as JSON lines
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
    }
}
