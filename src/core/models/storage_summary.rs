/// Line count of one audit file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub entries: usize,
}

/// Overview of an audit directory, ordered by file index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSummary {
    pub files: Vec<FileSummary>,
    pub capacity: usize,
    /// File that the next record will be written to.
    pub next_file: String,
}

impl StorageSummary {
    /// Total number of stored records.
    pub fn total_entries(&self) -> usize {
        self.files.iter().map(|f| f.entries).sum()
    }
}
