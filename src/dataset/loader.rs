//! CSV loading
//!
//! Loading is all-or-nothing: a missing file, a missing column or a single
//! unparseable row aborts the whole load.

use chrono::NaiveDateTime;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::record::{
    non_blank, RawTrip, DEMOGRAPHIC_COLUMNS, END_TIME, REQUIRED_COLUMNS, START_TIME,
};
use super::{apply_filter, DatasetError, FilterRequest, Result, TripData, TripRecord};
use crate::config::Config;

/// Accepted timestamp layouts, tried in order
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Load every trip in a city file
///
/// # Arguments
/// * `path` - CSV file
/// * `expect_demographics` - require the Gender and Birth Year columns
pub fn load_trips(path: &Path, expect_demographics: bool) -> Result<Vec<TripRecord>> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_trips(file, path, expect_demographics)
}

/// Parse trips from any reader; `path` is only used in error messages
pub fn read_trips<R: Read>(
    input: R,
    path: &Path,
    expect_demographics: bool,
) -> Result<Vec<TripRecord>> {
    let csv_err = |source: csv::Error| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let mut required: Vec<&str> = REQUIRED_COLUMNS.to_vec();
    if expect_demographics {
        required.extend(DEMOGRAPHIC_COLUMNS);
    }
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|source| DatasetError::Record {
            path: path.to_path_buf(),
            row,
            message: source.to_string(),
        })?;
        records.push(parse_row(path, row, raw)?);
    }

    Ok(records)
}

fn parse_row(path: &Path, row: usize, raw: RawTrip) -> Result<TripRecord> {
    let start_time = parse_timestamp(path, row, START_TIME, &raw.start_time)?;
    let end_time = parse_timestamp(path, row, END_TIME, &raw.end_time)?;

    if !raw.trip_duration.is_finite() || raw.trip_duration < 0.0 {
        return Err(DatasetError::InvalidValue {
            path: path.to_path_buf(),
            row,
            column: super::record::TRIP_DURATION.to_string(),
            value: raw.trip_duration.to_string(),
        });
    }

    Ok(TripRecord {
        row,
        start_time,
        end_time,
        trip_duration: raw.trip_duration,
        start_station: non_blank(raw.start_station),
        end_station: non_blank(raw.end_station),
        user_type: non_blank(raw.user_type),
        gender: non_blank(raw.gender),
        birth_year: raw.birth_year.filter(|y| y.is_finite()),
    })
}

/// Parse one timestamp cell; `path`, `row` and `column` locate it in errors
pub fn parse_timestamp(
    path: &Path,
    row: usize,
    column: &str,
    value: &str,
) -> Result<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| DatasetError::Timestamp {
            path: path.to_path_buf(),
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Load and filter the dataset a request asks for
pub fn load_city(config: &Config, request: &FilterRequest) -> Result<TripData> {
    let path = config.city_path(&request.city);
    let all = load_trips(&path, request.city.demographics)?;
    let loaded = all.len();
    let records = apply_filter(all, request);

    tracing::info!(
        city = %request.city.key,
        path = %path.display(),
        loaded,
        kept = records.len(),
        "loaded trip data"
    );

    Ok(TripData {
        city: request.city.clone(),
        loaded,
        records,
    })
}
