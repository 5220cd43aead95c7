use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::errors::{Result, VisitLogError};

/// Timestamp layout used when a record is written to an audit file.
/// Lexicographic order matches chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single visitor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub visitor_name: String,
    pub time_of_visit: NaiveDateTime,
}

impl Record {
    pub fn new(visitor_name: impl Into<String>, time_of_visit: NaiveDateTime) -> Self {
        Self {
            visitor_name: visitor_name.into(),
            time_of_visit,
        }
    }

    /// Render the record as one audit file line: `name;timestamp`.
    ///
    /// Semicolons inside the visitor name are written as-is.
    pub fn serialize(&self) -> String {
        format!(
            "{};{}",
            self.visitor_name,
            self.time_of_visit.format(TIMESTAMP_FORMAT)
        )
    }

    /// Parse a stored line back into a record.
    ///
    /// Splits on the last `;` so names containing semicolons still load.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (name, timestamp) = line.rsplit_once(';')?;
        let time_of_visit = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
        Some(Self::new(name, time_of_visit))
    }
}

/// Parse a user-supplied timestamp in [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        VisitLogError::InvalidTimestamp {
            value: value.to_string(),
        }
    })
}

/// A record read back from storage, tagged with the file that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredRecord {
    pub file: String,
    #[serde(flatten)]
    pub record: Record,
}
