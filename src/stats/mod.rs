//! Descriptive statistics over the filtered trips
//!
//! Four independent engines, each a pure function returning a summary
//! struct. `report` renders them in a fixed order.

mod duration;
mod plurality;
mod report;
mod station;
mod time;
mod users;

pub use duration::{duration_stats, round2, DurationStats};
pub use plurality::{plurality, value_counts};
pub use report::{report, OutputFormat};
pub use station::{station_stats, StationStats, TRIP_SEPARATOR, UNKNOWN_STATION};
pub use time::{time_stats, TimeStats};
pub use users::{birth_years, user_stats, BirthYears, Demographics, UserStats};

/// Statistics errors
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("No data to summarize: no {statistic} values in the selected trips")]
    Empty { statistic: &'static str },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
