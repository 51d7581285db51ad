//! Most frequent times of travel

use chrono::{Datelike, Month, Timelike, Weekday};
use serde::Serialize;

use super::{plurality, Result, StatsError};
use crate::dataset::TripRecord;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

// Indexed by num_days_from_sunday
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Popular start month, weekday and hour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub month: Month,
    pub month_trips: usize,
    pub weekday: Weekday,
    pub weekday_trips: usize,
    /// 0-23
    pub hour: u32,
    pub hour_trips: usize,
}

/// Compute over the start timestamps of `records`
pub fn time_stats(records: &[TripRecord]) -> Result<TimeStats> {
    let empty = || StatsError::Empty {
        statistic: "start time",
    };

    let (month_number, month_trips) =
        plurality(records.iter().map(|r| r.start_time.month())).ok_or_else(empty)?;
    let (day_index, weekday_trips) =
        plurality(records.iter().map(|r| r.start_time.weekday().num_days_from_sunday()))
            .ok_or_else(empty)?;
    let (hour, hour_trips) =
        plurality(records.iter().map(|r| r.start_time.hour())).ok_or_else(empty)?;

    Ok(TimeStats {
        month: MONTHS[(month_number - 1) as usize],
        month_trips,
        weekday: WEEKDAYS[day_index as usize],
        weekday_trips,
        hour,
        hour_trips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2017, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    fn trip(row: usize, start: NaiveDateTime) -> TripRecord {
        TripRecord::new(row, start, start)
    }

    #[test]
    fn test_time_stats() {
        let records = vec![
            trip(0, at(3, 6, 8)),  // Monday
            trip(1, at(3, 13, 8)), // Monday
            trip(2, at(4, 4, 17)), // Tuesday
            trip(3, at(3, 8, 17)), // Wednesday
            trip(4, at(5, 1, 8)),  // Monday
        ];
        let stats = time_stats(&records).unwrap();
        assert_eq!(stats.month, Month::March);
        assert_eq!(stats.month_trips, 3);
        assert_eq!(stats.weekday, Weekday::Mon);
        assert_eq!(stats.weekday_trips, 3);
        assert_eq!(stats.hour, 8);
        assert_eq!(stats.hour_trips, 3);
    }

    #[test]
    fn test_time_stats_ties_take_earliest() {
        // one trip each in February (Wed) and January (Sun), hours 23 and 0
        let records = vec![trip(0, at(2, 1, 23)), trip(1, at(1, 1, 0))];
        let stats = time_stats(&records).unwrap();
        assert_eq!(stats.month, Month::January);
        assert_eq!(stats.weekday, Weekday::Sun);
        assert_eq!(stats.hour, 0);
    }

    #[test]
    fn test_time_stats_empty() {
        assert!(matches!(time_stats(&[]), Err(StatsError::Empty { .. })));
    }
}
