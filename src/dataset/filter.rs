//! Month / day-of-week filtering
//!
//! A record survives a set filter only when BOTH its start and end
//! timestamps satisfy it.

use chrono::{Datelike, Month, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::config::{weekday_name, CityConfig};
use crate::dataset::TripRecord;

/// What the user asked to see
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterRequest {
    pub city: CityConfig,
    /// `None` = all months
    pub month: Option<Month>,
    /// `None` = all days
    pub day: Option<Weekday>,
}

impl FilterRequest {
    /// Request with no time filters
    pub fn unfiltered(city: CityConfig) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }

    /// Whether a record passes both filters
    pub fn matches(&self, record: &TripRecord) -> bool {
        self.matches_time(&record.start_time) && self.matches_time(&record.end_time)
    }

    fn matches_time(&self, time: &NaiveDateTime) -> bool {
        let month_ok = self
            .month
            .map_or(true, |m| time.month() == m.number_from_month());
        let day_ok = self.day.map_or(true, |d| time.weekday() == d);
        month_ok && day_ok
    }

    /// Human-readable summary, e.g. "chicago, month=March, day=all"
    pub fn describe(&self) -> String {
        let month = self.month.map_or("all", |m| m.name());
        let day = self.day.map_or("all", weekday_name);
        format!("{}, month={}, day={}", self.city.key, month, day)
    }
}

/// Keep only the records matching `request`, preserving order
pub fn apply_filter(records: Vec<TripRecord>, request: &FilterRequest) -> Vec<TripRecord> {
    records
        .into_iter()
        .filter(|record| request.matches(record))
        .collect()
}
