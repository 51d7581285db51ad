//! Console rendering of the statistics sections

use serde::Serialize;
use std::io::Write;
use std::time::Instant;

use super::{
    duration_stats, station_stats, time_stats, user_stats, DurationStats, Result, StationStats,
    TimeStats, UserStats,
};
use crate::config::weekday_name;
use crate::dataset::TripData;
use crate::prompt::SEPARATOR;

/// How sections are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per section
    Json,
}

#[derive(Serialize)]
struct SectionJson<'a, T: Serialize> {
    section: &'a str,
    elapsed_seconds: f64,
    stats: &'a T,
}

/// Compute and print all four sections in order
pub fn report<W: Write>(out: &mut W, data: &TripData, format: OutputFormat) -> Result<()> {
    let records = &data.records;

    section(
        out,
        format,
        "time",
        "Calculating The Most Frequent Times of Travel...",
        || time_stats(records),
        render_time,
    )?;
    section(
        out,
        format,
        "stations",
        "Calculating The Most Popular Stations and Trip...",
        || station_stats(records),
        render_stations,
    )?;
    section(
        out,
        format,
        "duration",
        "Calculating Trip Duration...",
        || duration_stats(records),
        render_duration,
    )?;
    section(
        out,
        format,
        "users",
        "Calculating User Stats...",
        || user_stats(records, &data.city),
        render_users,
    )?;

    Ok(())
}

fn section<W, T, C, R>(
    out: &mut W,
    format: OutputFormat,
    name: &str,
    title: &str,
    compute: C,
    render: R,
) -> Result<()>
where
    W: Write,
    T: Serialize,
    C: FnOnce() -> Result<T>,
    R: FnOnce(&mut W, &T) -> std::io::Result<()>,
{
    let started = Instant::now();
    let stats = compute()?;

    match format {
        OutputFormat::Text => {
            writeln!(out, "\n{}\n", title)?;
            render(out, &stats)?;
            let elapsed = started.elapsed().as_secs_f64();
            writeln!(out, "\nThis took {} seconds.", elapsed)?;
            writeln!(out, "{}", SEPARATOR)?;
            tracing::debug!(section = name, elapsed, "rendered statistics");
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(&SectionJson {
                section: name,
                elapsed_seconds: started.elapsed().as_secs_f64(),
                stats: &stats,
            })?;
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

pub(crate) fn render_time<W: Write>(out: &mut W, stats: &TimeStats) -> std::io::Result<()> {
    writeln!(out, "The most common month in this dataset is {}", stats.month.name())?;
    writeln!(
        out,
        "The most common day in this dataset is {}",
        weekday_name(stats.weekday)
    )?;
    writeln!(out, "The most common hour in this dataset is {}", stats.hour)
}

pub(crate) fn render_stations<W: Write>(out: &mut W, stats: &StationStats) -> std::io::Result<()> {
    writeln!(out, "The most common start station is {}", stats.start_station)?;
    writeln!(out, "The most common end station is {}", stats.end_station)?;
    writeln!(out, "The most common trip made is from {}", stats.trip)
}

pub(crate) fn render_duration<W: Write>(out: &mut W, stats: &DurationStats) -> std::io::Result<()> {
    writeln!(
        out,
        "The total trip time for this data is {:?} hours",
        stats.total_reported()
    )?;
    if let Some(days) = stats.days_reported() {
        writeln!(out, "This is equivalent to {:?} days!", days)?;
    }
    writeln!(
        out,
        "The average trip time was {:?} seconds or {:?} mins.",
        stats.mean_reported(),
        stats.mean_minutes_reported()
    )
}

pub(crate) fn render_users<W: Write>(out: &mut W, stats: &UserStats) -> std::io::Result<()> {
    writeln!(out, "Counts of user types:")?;
    write_counts(out, &stats.user_types)?;

    match &stats.demographics {
        Some(demo) => {
            writeln!(out, "\nCounts of gender:")?;
            write_counts(out, &demo.genders)?;
            writeln!(out)?;
            let years = &demo.birth_years;
            writeln!(
                out,
                "The earliest birth year of all users in this dataset is {}",
                years.earliest
            )?;
            writeln!(
                out,
                "The most recent birth year of all users in this dataset is {}",
                years.most_recent
            )?;
            writeln!(
                out,
                "The most common birth year of all users in this dataset is {}",
                years.most_common
            )
        }
        None => {
            writeln!(out, "{} has no data on gender", stats.city)?;
            writeln!(out, "{} has no data on the birth year", stats.city)
        }
    }
}

fn write_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> std::io::Result<()> {
    let key_width = counts.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let count_width = counts
        .iter()
        .map(|(_, n)| n.to_string().len())
        .max()
        .unwrap_or(0);
    for (key, count) in counts {
        writeln!(
            out,
            "{:<kw$}    {:>cw$}",
            key,
            count,
            kw = key_width,
            cw = count_width
        )?;
    }
    Ok(())
}
