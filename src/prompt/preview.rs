//! Paged preview of the filtered rows

use std::io::{BufRead, Write};

use super::{Prompter, Result};
use crate::dataset::{TripData, TripRecord};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MISSING: &str = "NaN";

/// The window `[offset, offset + size)`, clamped; empty past the end
pub fn page(records: &[TripRecord], offset: usize, size: usize) -> &[TripRecord] {
    let start = offset.min(records.len());
    let end = offset.saturating_add(size).min(records.len());
    &records[start..end]
}

/// Render rows as an aligned table
pub fn render_page<W: Write>(out: &mut W, rows: &[TripRecord], demographics: bool) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "No more rows to display.")?;
        return Ok(());
    }

    let mut header = vec![
        String::new(),
        "Start Time".to_string(),
        "End Time".to_string(),
        "Trip Duration".to_string(),
        "Start Station".to_string(),
        "End Station".to_string(),
        "User Type".to_string(),
    ];
    if demographics {
        header.push("Gender".to_string());
        header.push("Birth Year".to_string());
    }

    let table: Vec<Vec<String>> = rows.iter().map(|r| row_cells(r, demographics)).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &table {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &header, &widths)?;
    for cells in &table {
        write_row(out, cells, &widths)?;
    }
    Ok(())
}

fn row_cells(record: &TripRecord, demographics: bool) -> Vec<String> {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());

    let mut cells = vec![
        record.row.to_string(),
        record.start_time.format(TIME_FORMAT).to_string(),
        record.end_time.format(TIME_FORMAT).to_string(),
        record.trip_duration.to_string(),
        text(&record.start_station),
        text(&record.end_station),
        text(&record.user_type),
    ];
    if demographics {
        cells.push(text(&record.gender));
        cells.push(
            record
                .birth_year
                .map_or_else(|| MISSING.to_string(), |y| format!("{:.0}", y)),
        );
    }
    cells
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Offer the filtered rows page by page until the user says no
///
/// # Returns
/// * `Ok(pages)` - number of pages shown (empty pages included)
pub fn preview<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    data: &TripData,
    page_size: usize,
) -> Result<usize> {
    let mut offset = 0;
    let mut shown = 0;

    loop {
        let which = if shown == 0 { "first" } else { "next" };
        let wants = prompter.ask_yes_no(
            &format!(
                "Would you like to see the {} {} rows of your filtered data? Please answer yes or no.\n",
                which, page_size
            ),
            "Sorry, that input is invalid. Please answer 'yes' or 'no'.",
        )?;
        if !wants {
            return Ok(shown);
        }

        let rows = page(&data.records, offset, page_size);
        render_page(prompter.output(), rows, data.city.demographics)?;
        offset += page_size;
        shown += 1;
    }
}
