use chrono::{NaiveDate, NaiveDateTime};
use colored::Colorize;

use crate::cli::context;
use crate::cli::output;
use crate::core::errors::{Result, VisitLogError};
use crate::core::models::record::{StoredRecord, TIMESTAMP_FORMAT};

/// Execute the `visitlog log` command.
///
/// Displays stored visits with optional filters for visitor, date,
/// and entry count.
pub fn execute(
    visitor: Option<&str>,
    since: Option<&str>,
    last: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = context::load_config()?;
    let service = context::audit_service(&config)?;

    let since_dt = since.map(parse_since).transpose()?;

    let entries: Vec<StoredRecord> = service
        .entries()?
        .into_iter()
        .filter(|e| matches_visitor(e, visitor))
        .filter(|e| since_dt.is_none_or(|s| e.record.time_of_visit >= s))
        .collect();

    // Apply --last N (take from the end)
    let skip = last.map_or(0, |n| entries.len().saturating_sub(n));
    let display = &entries[skip..];

    if json {
        // Explicitly requested data, printed even with --quiet
        println!("{}", serde_json::to_string_pretty(display)?);
        return Ok(());
    }

    if display.is_empty() {
        output::header("visitlog log");
        output::warning("No visits recorded");
        if visitor.is_some() || since.is_some() {
            output::plain("  Try removing filters to see all entries.");
        }
        return Ok(());
    }

    output::header(&format!("visitlog log ({} entries)", display.len()));
    output::plain("");

    for entry in display {
        print_entry(entry);
    }

    Ok(())
}

fn matches_visitor(entry: &StoredRecord, visitor: Option<&str>) -> bool {
    match visitor {
        Some(filter) => entry
            .record
            .visitor_name
            .to_lowercase()
            .contains(&filter.to_lowercase()),
        None => true,
    }
}

/// Parse a date string (`YYYY-MM-DD`) into midnight of that day.
fn parse_since(s: &str) -> Result<NaiveDateTime> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| VisitLogError::InvalidTimestamp {
            value: s.to_string(),
        })
        .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
}

/// Print a single entry as a formatted row.
fn print_entry(entry: &StoredRecord) {
    let date = entry.record.time_of_visit.format(TIMESTAMP_FORMAT);

    output::plain(&format!(
        "  {} {} {:<20} {}",
        date.to_string().dimmed(),
        "│".dimmed(),
        entry.record.visitor_name.cyan(),
        entry.file.dimmed(),
    ));
}
