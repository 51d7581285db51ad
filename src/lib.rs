//! Bikeshare: interactive explorer for US bike-share trip data
//!
//! Loads one city's trip records, filters them by month and weekday, and
//! prints popular times, stations, trip durations and user breakdowns.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod prompt;
pub mod stats;

// Re-export the pipeline entry points
pub use config::{CityConfig, Config};
pub use dataset::{apply_filter, load_city, load_trips, FilterRequest, TripData, TripRecord};
pub use prompt::{normalize, Prompter};
pub use stats::{report, OutputFormat};
