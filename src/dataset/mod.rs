//! Trip data loading and filtering
//!
//! Reads one city's CSV into memory, parses the timestamp columns and keeps
//! the records matching a `FilterRequest`.

mod filter;
mod loader;
mod record;

pub use filter::{apply_filter, FilterRequest};
pub use loader::{load_city, load_trips, parse_timestamp, read_trips};
pub use record::{TripRecord, DEMOGRAPHIC_COLUMNS, REQUIRED_COLUMNS};

use std::path::PathBuf;

use crate::config::CityConfig;

/// Dataset errors (all fatal for the current run)
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Cannot open data file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Data file '{path}' has no '{column}' column")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Malformed record at row {row} of '{path}': {message}")]
    Record {
        path: PathBuf,
        row: usize,
        message: String,
    },

    #[error("Unparseable timestamp in '{column}' at row {row} of '{path}': '{value}'")]
    Timestamp {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid value in '{column}' at row {row} of '{path}': '{value}'")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("No trip records match the selected filters ({filter}); nothing to summarize")]
    NoMatches { filter: String },
}

pub type Result<T> = std::result::Result<T, DatasetError>;

/// The filtered dataset for one session iteration
#[derive(Debug, Clone)]
pub struct TripData {
    pub city: CityConfig,
    /// Rows in the file before filtering
    pub loaded: usize,
    /// Rows that passed the filter, in file order
    pub records: Vec<TripRecord>,
}

impl TripData {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
