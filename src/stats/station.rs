//! Most popular stations and trip

use serde::Serialize;

use super::{plurality, Result, StatsError};
use crate::dataset::TripRecord;

/// Joins start and end station names in the trip key
pub const TRIP_SEPARATOR: &str = " to ";

/// Stand-in for a missing station name inside a trip key
pub const UNKNOWN_STATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub start_station: String,
    pub start_trips: usize,
    pub end_station: String,
    pub end_trips: usize,
    /// "<start> to <end>"
    pub trip: String,
    pub trip_count: usize,
}

fn trip_key(record: &TripRecord) -> String {
    format!(
        "{}{}{}",
        record.start_station.as_deref().unwrap_or(UNKNOWN_STATION),
        TRIP_SEPARATOR,
        record.end_station.as_deref().unwrap_or(UNKNOWN_STATION)
    )
}

pub fn station_stats(records: &[TripRecord]) -> Result<StationStats> {
    let (start_station, start_trips) =
        plurality(records.iter().filter_map(|r| r.start_station.as_deref())).ok_or(
            StatsError::Empty {
                statistic: "start station",
            },
        )?;
    let (end_station, end_trips) =
        plurality(records.iter().filter_map(|r| r.end_station.as_deref())).ok_or(
            StatsError::Empty {
                statistic: "end station",
            },
        )?;
    let (trip, trip_count) = plurality(records.iter().map(trip_key))
        .ok_or(StatsError::Empty { statistic: "trip" })?;

    Ok(StationStats {
        start_station: start_station.to_string(),
        start_trips,
        end_station: end_station.to_string(),
        end_trips,
        trip,
        trip_count,
    })
}
