//! Session Tests
//!
//! End-to-end runs of the interactive pipeline against fixture CSV files.
//! Tests verify:
//! - Unfiltered and filtered loads per city
//! - Station, duration and demographic reports
//! - Washington's missing demographics
//! - Paging and restart behavior

use std::io::Cursor;
use std::path::Path;

use bikeshare::cli::{Error, Session};
use bikeshare::dataset::DatasetError;
use bikeshare::{apply_filter, load_trips, Config, FilterRequest, OutputFormat};
use chrono::{Datelike, Month};
use tempfile::TempDir;

const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:00:00,2017-01-02 08:01:00,60,A,B,Subscriber,Male,1990.0
2,2017-01-03 08:30:00,2017-01-03 08:32:00,120,A,B,Subscriber,Female,1985.0
3,2017-03-07 17:00:00,2017-03-07 17:03:00,180,C,D,Customer,,1990.0
4,2017-03-31 23:59:00,2017-04-01 00:04:00,300,C,D,Subscriber,Male,2000.0
";

const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
2,2017-06-22 09:00:00,2017-06-22 09:10:00,600,14th & Belmont St NW,15th & K St NW,Customer
";

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("chicago.csv"), CHICAGO).unwrap();
    std::fs::write(dir.path().join("washington.csv"), WASHINGTON).unwrap();
    dir
}

fn config_for(dir: &Path) -> Config {
    Config {
        data_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

fn run_session(config: &Config, input: &str) -> (bikeshare::cli::Result<usize>, String) {
    let mut session = Session::new(
        config,
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        OutputFormat::Text,
    );
    let result = session.run();
    (result, String::from_utf8(session.into_output()).unwrap())
}

#[test]
fn test_chicago_unfiltered_loads_every_record() {
    let dir = fixture_dir();
    let config = config_for(dir.path());
    let city = config.city("chicago").unwrap().clone();

    let all = load_trips(&config.city_path(&city), true).unwrap();
    let filtered = apply_filter(all.clone(), &FilterRequest::unfiltered(city));
    assert_eq!(filtered.len(), 4);
    assert_eq!(filtered, all);
}

#[test]
fn test_month_filter_drops_trips_crossing_months() {
    let dir = fixture_dir();
    let config = config_for(dir.path());
    let city = config.city("chicago").unwrap().clone();

    let all = load_trips(&config.city_path(&city), true).unwrap();
    let march = apply_filter(all, &FilterRequest::unfiltered(city).with_month(Month::March));

    // Row 3 starts in March but ends in April
    assert_eq!(march.len(), 1);
    for record in &march {
        assert_eq!(record.start_time.month(), 3);
        assert_eq!(record.end_time.month(), 3);
    }
}

#[test]
fn test_chicago_report() {
    let dir = fixture_dir();
    let config = config_for(dir.path());

    let (result, out) = run_session(&config, "Chicago\nnone\nno\nno\n");
    assert_eq!(result.unwrap(), 1);

    assert!(out.contains("The most common month in this dataset is January"));
    assert!(out.contains("The most common start station is A"));
    assert!(out.contains("The most common end station is B"));
    assert!(out.contains("The most common trip made is from A to B"));
    // 660 seconds
    assert!(out.contains("The total trip time for this data is 11.0 hours"));
    assert!(out.contains("The average trip time was 165.0 seconds or 2.75 mins."));
    assert!(out.contains("The earliest birth year of all users in this dataset is 1985"));
    assert!(out.contains("The most recent birth year of all users in this dataset is 2000"));
    assert!(out.contains("The most common birth year of all users in this dataset is 1990"));
}

#[test]
fn test_washington_reports_no_demographics() {
    let dir = fixture_dir();
    let config = config_for(dir.path());

    let (result, out) = run_session(&config, "washington\nnone\nno\nno\n");
    assert_eq!(result.unwrap(), 1);
    assert!(out.contains("Washington has no data on gender"));
    assert!(out.contains("Washington has no data on the birth year"));
    assert!(out.contains("The most common trip made is from 14th & Belmont St NW to 15th & K St NW"));
}

#[test]
fn test_day_filter_by_digit() {
    let dir = fixture_dir();
    let config = config_for(dir.path());

    // 3 = Tuesday: 2017-01-03 and 2017-03-07
    let (result, out) = run_session(&config, "chicago\nday\n3\nno\nno\n");
    assert_eq!(result.unwrap(), 1);
    assert!(out.contains("The most common day in this dataset is Tuesday"));
    assert!(out.contains("The total trip time for this data is 5.0 hours"));
}

#[test]
fn test_preview_pages_through_rows() {
    let dir = fixture_dir();
    let config = Config {
        page_size: 3,
        ..config_for(dir.path())
    };

    let (result, out) = run_session(&config, "chicago\nnone\nyes\nyes\nyes\nno\nno\n");
    assert_eq!(result.unwrap(), 1);
    assert!(out.contains("see the first 3 rows"));
    assert_eq!(out.matches("see the next 3 rows").count(), 3);
    assert_eq!(out.matches("No more rows to display.").count(), 1);
    assert!(out.contains("2017-04-01 00:04:00"));
}

#[test]
fn test_restart_loop() {
    let dir = fixture_dir();
    let config = config_for(dir.path());

    let input = "chicago\nnone\nno\nyes\nwashington\nboth\njune\n4\nno\nno\n";
    let (result, out) = run_session(&config, input);
    assert_eq!(result.unwrap(), 2);
    // 4 = Wednesday, 2017-06-21
    assert!(out.contains("The average trip time was 489.07 seconds or 8.15 mins."));
}

#[test]
fn test_missing_city_file_is_fatal() {
    let dir = fixture_dir();
    let config = config_for(dir.path());

    let (result, _) = run_session(&config, "new york\nnone\n");
    assert!(matches!(
        result,
        Err(Error::Dataset(DatasetError::Open { .. }))
    ));
}

#[test]
fn test_json_output() {
    let dir = fixture_dir();
    let config = config_for(dir.path());

    let mut session = Session::new(
        &config,
        Cursor::new(b"chicago\nnone\nno\nno\n".to_vec()),
        Vec::new(),
        OutputFormat::Json,
    );
    session.run().unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();

    let sections: Vec<serde_json::Value> = out
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[1]["stats"]["start_station"], "A");
    assert_eq!(sections[3]["stats"]["user_types"][0][0], "Subscriber");
}
