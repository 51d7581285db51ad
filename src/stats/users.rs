//! User type, gender and birth year breakdowns

use serde::Serialize;

use super::{plurality, value_counts, Result, StatsError};
use crate::config::CityConfig;
use crate::dataset::TripRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYears {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Only computed for cities whose files carry demographics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demographics {
    /// (gender, trips), most frequent first; nulls excluded
    pub genders: Vec<(String, usize)>,
    pub birth_years: BirthYears,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub city: String,
    /// (user type, trips), most frequent first; nulls excluded
    pub user_types: Vec<(String, usize)>,
    /// `None` for cities without demographic columns
    pub demographics: Option<Demographics>,
}

pub fn user_stats(records: &[TripRecord], city: &CityConfig) -> Result<UserStats> {
    if records.is_empty() {
        return Err(StatsError::Empty {
            statistic: "user type",
        });
    }

    let user_types = owned(value_counts(
        records.iter().filter_map(|r| r.user_type.as_deref()),
    ));

    let demographics = if city.demographics {
        Some(demographics_for(records)?)
    } else {
        None
    };

    Ok(UserStats {
        city: city.display_name(),
        user_types,
        demographics,
    })
}

fn demographics_for(records: &[TripRecord]) -> Result<Demographics> {
    let genders = owned(value_counts(
        records.iter().filter_map(|r| r.gender.as_deref()),
    ));
    Ok(Demographics {
        genders,
        birth_years: birth_years(records)?,
    })
}

/// Earliest, most recent and most common birth year, as whole years
pub fn birth_years(records: &[TripRecord]) -> Result<BirthYears> {
    let years: Vec<i64> = records
        .iter()
        .filter_map(|r| r.birth_year)
        .map(|y| y as i64)
        .collect();

    let empty = || StatsError::Empty {
        statistic: "birth year",
    };
    let earliest = years.iter().copied().min().ok_or_else(empty)?;
    let most_recent = years.iter().copied().max().ok_or_else(empty)?;
    let (most_common, _) = plurality(years).ok_or_else(empty)?;

    Ok(BirthYears {
        earliest,
        most_recent,
        most_common,
    })
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect()
}
