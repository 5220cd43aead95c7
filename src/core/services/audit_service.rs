use crate::core::errors::{Result, VisitLogError};
use crate::core::models::file_update::FileUpdate;
use crate::core::models::record::{Record, StoredRecord};
use crate::core::models::storage_summary::{FileSummary, StorageSummary};
use crate::core::services::audit_manager::AuditManager;
use crate::core::traits::persister::Persister;

/// Runs one read → decide → write cycle against a `Persister`.
///
/// Holds no state between calls. Two callers sharing a location must
/// serialize their calls themselves.
pub struct AuditService<P: Persister> {
    pub persister: P,
    pub manager: AuditManager,
}

impl<P: Persister> AuditService<P> {
    /// Store a visitor record and return the update that was applied.
    ///
    /// Nothing is written when the current files fail validation.
    pub fn add_record(&self, record: &Record) -> Result<FileUpdate> {
        let files = self.persister.read_directory()?;
        let update = self.manager.add_record(&files, record)?;
        self.persister.apply_update(&update)?;

        tracing::info!(
            visitor = %record.visitor_name,
            file = %update.file_name,
            "record stored"
        );

        Ok(update)
    }

    /// Every stored record, oldest file first and in write order within a file.
    pub fn entries(&self) -> Result<Vec<StoredRecord>> {
        let files = self.persister.read_directory()?;
        let sorted = self.manager.sort_by_index(&files)?;

        let mut entries = Vec::new();
        for (_, file) in sorted {
            // Every line counts toward capacity, so a blank one is malformed too
            for (line_num, line) in file.lines.iter().enumerate() {
                let record =
                    Record::parse_line(line).ok_or_else(|| VisitLogError::MalformedRecord {
                        file: file.name.clone(),
                        line: line_num + 1,
                    })?;
                entries.push(StoredRecord {
                    file: file.name.clone(),
                    record,
                });
            }
        }

        Ok(entries)
    }

    /// Per-file line counts and the file the next record will go to.
    pub fn summary(&self) -> Result<StorageSummary> {
        let files = self.persister.read_directory()?;
        let sorted = self.manager.sort_by_index(&files)?;

        Ok(StorageSummary {
            files: sorted
                .iter()
                .map(|(_, f)| FileSummary {
                    name: f.name.clone(),
                    entries: f.lines.len(),
                })
                .collect(),
            capacity: self.manager.max_entries_per_file(),
            next_file: self.manager.next_file_name(&files)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::file_persister::FilePersister;
    use crate::core::models::log_file::FileName;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use tempfile::TempDir;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 4, 6)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn service(dir: &std::path::Path, capacity: usize) -> AuditService<FilePersister> {
        AuditService {
            persister: FilePersister::new(dir),
            manager: AuditManager::new(capacity, "txt").unwrap(),
        }
    }

    #[test]
    fn first_record_creates_first_file() {
        let tmp = TempDir::new().unwrap();
        let svc = service(tmp.path(), 3);

        let update = svc.add_record(&Record::new("Peter", at(16, 30))).unwrap();

        assert_eq!(update.file_name, "audit_1.txt");
        assert_eq!(
            fs::read_to_string(tmp.path().join("audit_1.txt")).unwrap(),
            "Peter;2019-04-06T16:30:00"
        );
    }

    #[test]
    fn rotates_into_next_file_with_reference_scenario() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("audit_1.txt"), "").unwrap();
        fs::write(
            tmp.path().join("audit_2.txt"),
            "Peter;2019-04-06T16:30:00\r\nJane;2019-04-06T16:40:00\r\nJack;2019-04-06T17:00:00",
        )
        .unwrap();
        let svc = service(tmp.path(), 3);

        svc.add_record(&Record::new("Alice", at(18, 0))).unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join("audit_3.txt")).unwrap(),
            "Alice;2019-04-06T18:00:00"
        );
    }

    #[test]
    fn indices_grow_by_one_across_calls() {
        let tmp = TempDir::new().unwrap();
        let svc = service(tmp.path(), 2);

        let mut previous_max = 0;
        for minute in 0..7 {
            let update = svc.add_record(&Record::new("V", at(12, minute))).unwrap();
            let index = FileName::parse(&update.file_name, "txt").unwrap().index;
            assert!(index == previous_max || index == previous_max + 1);
            previous_max = index;
        }

        assert_eq!(previous_max, 4);
        let last = fs::read_to_string(tmp.path().join("audit_4.txt")).unwrap();
        assert_eq!(last, "V;2019-04-06T12:06:00");
        let full = fs::read_to_string(tmp.path().join("audit_3.txt")).unwrap();
        assert_eq!(full, "V;2019-04-06T12:04:00\r\nV;2019-04-06T12:05:00");
    }

    #[test]
    fn invalid_file_aborts_before_write() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("audit_1.txt"), "A;2019-04-06T10:00:00").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        let svc = service(tmp.path(), 3);

        let err = svc.add_record(&Record::new("B", at(11, 0))).unwrap_err();

        assert!(matches!(err, VisitLogError::InvalidFileName { .. }));
        assert_eq!(
            fs::read_to_string(tmp.path().join("audit_1.txt")).unwrap(),
            "A;2019-04-06T10:00:00"
        );
    }

    #[test]
    fn entries_follow_index_then_line_order() {
        let tmp = TempDir::new().unwrap();
        let svc = service(tmp.path(), 2);
        for (name, minute) in [("A", 0), ("B", 1), ("C", 2)] {
            svc.add_record(&Record::new(name, at(9, minute))).unwrap();
        }

        let entries = svc.entries().unwrap();

        let names: Vec<&str> = entries
            .iter()
            .map(|e| e.record.visitor_name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(entries[2].file, "audit_2.txt");
    }

    #[test]
    fn entries_report_malformed_line() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("audit_1.txt"),
            "A;2019-04-06T10:00:00\r\ngarbage",
        )
        .unwrap();

        let err = service(tmp.path(), 3).entries().unwrap_err();

        assert!(matches!(err, VisitLogError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn blank_line_is_malformed_and_counted() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("audit_1.txt"),
            "A;2019-04-06T10:00:00\r\n\r\nB;2019-04-06T11:00:00",
        )
        .unwrap();
        let svc = service(tmp.path(), 3);

        let err = svc.entries().unwrap_err();
        assert!(matches!(err, VisitLogError::MalformedRecord { line: 2, .. }));

        let summary = svc.summary().unwrap();
        assert_eq!(summary.total_entries(), 3);
        assert_eq!(summary.next_file, "audit_2.txt");
    }

    #[test]
    fn summary_counts_lines_and_next_target() {
        let tmp = TempDir::new().unwrap();
        let svc = service(tmp.path(), 2);
        for minute in 0..3 {
            svc.add_record(&Record::new("V", at(8, minute))).unwrap();
        }

        let summary = svc.summary().unwrap();

        assert_eq!(summary.files.len(), 2);
        assert_eq!(summary.files[0].entries, 2);
        assert_eq!(summary.files[1].entries, 1);
        assert_eq!(summary.total_entries(), 3);
        assert_eq!(summary.capacity, 2);
        assert_eq!(summary.next_file, "audit_2.txt");
    }
}
