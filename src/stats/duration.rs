//! Total and average trip duration
//!
//! Derived figures reproduce the long-standing report exactly: the total is
//! divided by 60 and printed as "hours", and the "days" line appears only
//! when `total / 24 > 24`.

use serde::Serialize;

use super::{Result, StatsError};
use crate::dataset::TripRecord;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const HOURS_PER_DAY: f64 = 24.0;

/// Round to 2 decimals on the exact binary value, exact halves to even
///
/// Matches Python's `round(x, 2)`: `0.125` gives `0.12` and `2.675` (stored
/// just below the half) gives `2.67`.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();
    if scaled - floor != 0.5 {
        return scaled.round() / 100.0;
    }

    // The product may have been rounded onto the half; its exact error says
    // which side the true value lies on
    let error = value.mul_add(100.0, -scaled);
    let rounded = if error > 0.0 {
        floor + 1.0
    } else if error < 0.0 || floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    /// Sum of trip durations, seconds
    pub total_seconds: f64,
    /// Mean trip duration, seconds
    pub mean_seconds: f64,
}

impl DurationStats {
    /// Figure printed as the total "hours"
    pub fn total_reported(&self) -> f64 {
        round2(self.total_seconds / SECONDS_PER_MINUTE)
    }

    /// Figure printed as "days", when it is printed at all
    pub fn days_reported(&self) -> Option<f64> {
        let total_in_days = self.total_seconds / HOURS_PER_DAY;
        if total_in_days > HOURS_PER_DAY {
            Some(round2(total_in_days / HOURS_PER_DAY))
        } else {
            None
        }
    }

    pub fn mean_reported(&self) -> f64 {
        round2(self.mean_seconds)
    }

    /// Rounded mean divided by 60, rounded again
    pub fn mean_minutes_reported(&self) -> f64 {
        round2(self.mean_reported() / SECONDS_PER_MINUTE)
    }
}

pub fn duration_stats(records: &[TripRecord]) -> Result<DurationStats> {
    if records.is_empty() {
        return Err(StatsError::Empty {
            statistic: "trip duration",
        });
    }

    let total_seconds: f64 = records.iter().map(|r| r.trip_duration).sum();
    Ok(DurationStats {
        trips: records.len(),
        total_seconds,
        mean_seconds: total_seconds / records.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trips(durations: &[f64]) -> Vec<TripRecord> {
        let t = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        durations
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let mut r = TripRecord::new(i, t, t);
                r.trip_duration = *d;
                r
            })
            .collect()
    }

    #[test]
    fn test_duration_fixture() {
        let stats = duration_stats(&trips(&[60.0, 120.0, 180.0])).unwrap();
        assert_eq!(stats.total_seconds, 360.0);
        assert_eq!(stats.mean_seconds, 120.0);
        assert_eq!(stats.total_reported(), 6.0);
        assert_eq!(stats.mean_reported(), 120.0);
        assert_eq!(stats.mean_minutes_reported(), 2.0);
        // 360 / 24 = 15, not above 24
        assert_eq!(stats.days_reported(), None);
    }

    #[test]
    fn test_days_line_threshold() {
        // 576 / 24 == 24 exactly: still not shown
        let at_threshold = duration_stats(&trips(&[576.0])).unwrap();
        assert_eq!(at_threshold.days_reported(), None);

        let above = duration_stats(&trips(&[600.0, 600.0])).unwrap();
        // 1200 / 24 / 24 = 2.0833..
        assert_eq!(above.days_reported(), Some(2.08));
    }

    #[test]
    fn test_rounding() {
        let stats = duration_stats(&trips(&[100.0, 101.0, 101.0])).unwrap();
        // mean 100.666..
        assert_eq!(stats.mean_reported(), 100.67);
        assert_eq!(stats.mean_minutes_reported(), 1.68);
        assert_eq!(stats.total_reported(), 5.03);
    }

    #[test]
    fn test_round2_halves_go_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_mean_on_exact_half() {
        let stats = duration_stats(&trips(&[100.0, 100.25])).unwrap();
        assert_eq!(stats.mean_seconds, 100.125);
        assert_eq!(stats.mean_reported(), 100.12);
        // 100.12 / 60 = 1.6686..
        assert_eq!(stats.mean_minutes_reported(), 1.67);
        // 200.25 / 60 = 3.3375
        assert_eq!(stats.total_reported(), 3.34);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(duration_stats(&[]), Err(StatsError::Empty { .. })));
    }
}
