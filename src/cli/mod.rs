//! CLI module
//!
//! Provides:
//! - Argument parsing
//! - The interactive session loop
//! - Error type and exit codes shared by the binary

pub mod args;
pub mod session;

// Re-exports
pub use args::Args;
pub use session::Session;

use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::prompt::PromptError;
use crate::stats::StatsError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
