//! Trip record types
//!
//! `RawTrip` mirrors one CSV row as text; `TripRecord` is the parsed form
//! every other module works with.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must carry
pub const REQUIRED_COLUMNS: [&str; 6] = [
    START_TIME,
    END_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

/// Columns carried only by cities with demographics
pub const DEMOGRAPHIC_COLUMNS: [&str; 2] = [GENDER, BIRTH_YEAR];

/// One CSV row before timestamp parsing
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: Option<String>,
    #[serde(rename = "End Station")]
    pub end_station: Option<String>,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A parsed trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    /// 0-based position in the source file
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Seconds
    pub trip_duration: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl TripRecord {
    /// Record spanning `start_time..end_time`, its duration taken from the
    /// timestamps and every optional field empty
    pub fn new(row: usize, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            row,
            start_time,
            end_time,
            trip_duration: (end_time - start_time).num_seconds().max(0) as f64,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }
}

/// Drop empty or whitespace-only cells
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
