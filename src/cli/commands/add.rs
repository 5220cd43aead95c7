use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::cli::context;
use crate::cli::output;
use crate::core::errors::{Result, VisitLogError};
use crate::core::models::record::{Record, parse_timestamp};

/// Execute the `visitlog add` command.
///
/// Stores one visitor record, rotating to a new audit file when the
/// current one is full.
pub fn execute(name: &str, at: Option<&str>) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(VisitLogError::InvalidRecord {
            detail: "visitor name must not be empty".into(),
        });
    }
    if name.contains([';', '\r', '\n']) {
        return Err(VisitLogError::InvalidRecord {
            detail: format!("visitor name '{name}' must not contain ';' or line breaks"),
        });
    }

    let time_of_visit = match at {
        Some(value) => parse_timestamp(value)?,
        None => now(),
    };

    let config = context::load_config()?;
    let service = context::audit_service(&config)?;

    let record = Record::new(name, time_of_visit);
    let update = service.add_record(&record)?;

    output::success(&format!(
        "Recorded {} in {}",
        record.serialize(),
        update.file_name
    ));

    Ok(())
}

/// Current local time, truncated to whole seconds.
fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
