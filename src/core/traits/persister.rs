use crate::core::errors::Result;
use crate::core::models::file_update::FileUpdate;
use crate::core::models::log_file::LogFile;

/// Port for the storage location that holds the audit files.
pub trait Persister: Send + Sync {
    /// Load every audit file in the location with its lines.
    ///
    /// A location with no files yields an empty vector.
    fn read_directory(&self) -> Result<Vec<LogFile>>;

    /// Replace the content of the named file, creating it if needed.
    fn apply_update(&self, update: &FileUpdate) -> Result<()>;
}
