//! Interactive prompts
//!
//! Provides:
//! - Input normalization
//! - Validated prompting against a token set
//! - Filter collection (city, mode, month, day)
//! - Paged preview of the filtered rows

mod filters;
mod normalize;
mod preview;
mod prompter;

pub use filters::{collect_filters, FilterMode, SEPARATOR};
pub use normalize::normalize;
pub use preview::{page, preview, render_page};
pub use prompter::{match_token, Prompter};

/// Prompt errors
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    InputClosed,

    #[error("Accepted answer '{0}' does not map to a configured value")]
    Unmapped(String),
}

pub type Result<T> = std::result::Result<T, PromptError>;
