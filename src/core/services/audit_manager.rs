use std::collections::BTreeMap;

use crate::core::errors::{Result, VisitLogError};
use crate::core::models::file_update::FileUpdate;
use crate::core::models::log_file::{FileName, LogFile};
use crate::core::models::record::Record;

/// Separator placed between records inside an audit file.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Decides which audit file a new record goes to and what that file
/// must contain afterwards.
///
/// Performs no I/O: the caller supplies the current files and applies
/// the returned `FileUpdate`.
#[derive(Debug, Clone)]
pub struct AuditManager {
    max_entries_per_file: usize,
    extension: String,
}

impl AuditManager {
    /// Create a manager that rotates after `max_entries_per_file` records.
    pub fn new(max_entries_per_file: usize, extension: impl Into<String>) -> Result<Self> {
        if max_entries_per_file == 0 {
            return Err(VisitLogError::InvalidConfig {
                detail: "max_entries must be at least 1".into(),
            });
        }

        Ok(Self {
            max_entries_per_file,
            extension: extension.into(),
        })
    }

    pub fn max_entries_per_file(&self) -> usize {
        self.max_entries_per_file
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Compute the update that stores `record`.
    ///
    /// - No files: create `audit_1` holding only the record
    /// - Newest file below capacity: rewrite it with the record appended
    /// - Newest file full: create the next index holding only the record
    pub fn add_record(&self, files: &[LogFile], record: &Record) -> Result<FileUpdate> {
        let sorted = self.sort_by_index(files)?;
        let new_record = record.serialize();

        let Some((current, current_file)) = sorted.last() else {
            return Ok(FileUpdate::new(self.file_name(1).to_string(), new_record));
        };

        if current_file.lines.len() < self.max_entries_per_file {
            let mut lines = current_file.lines.clone();
            lines.push(new_record);
            return Ok(FileUpdate::new(
                current_file.name.clone(),
                lines.join(LINE_SEPARATOR),
            ));
        }

        let next = self.next_index(current)?;
        Ok(FileUpdate::new(self.file_name(next).to_string(), new_record))
    }

    /// Name of the file the next record would be written to.
    pub fn next_file_name(&self, files: &[LogFile]) -> Result<String> {
        let sorted = self.sort_by_index(files)?;

        let name = match sorted.last() {
            None => self.file_name(1),
            Some((current, file)) if file.lines.len() < self.max_entries_per_file => {
                current.clone()
            }
            Some((current, _)) => self.file_name(self.next_index(current)?),
        };

        Ok(name.to_string())
    }

    /// Parse every file name and order the files by index, oldest first.
    ///
    /// Fails on the first name that is not `audit_<N>.<ext>` or on two
    /// files sharing an index.
    pub fn sort_by_index<'a>(&self, files: &'a [LogFile]) -> Result<Vec<(FileName, &'a LogFile)>> {
        let mut by_index: BTreeMap<u32, (FileName, &LogFile)> = BTreeMap::new();

        for file in files {
            let name = FileName::parse(&file.name, &self.extension)?;
            let index = name.index;
            if by_index.insert(index, (name, file)).is_some() {
                return Err(VisitLogError::DuplicateIndex { index });
            }
        }

        Ok(by_index.into_values().collect())
    }

    fn next_index(&self, current: &FileName) -> Result<u32> {
        current
            .index
            .checked_add(1)
            .ok_or(VisitLogError::IndexExhausted {
                index: current.index,
            })
    }

    fn file_name(&self, index: u32) -> FileName {
        FileName::new(index, self.extension.as_str())
    }
}
