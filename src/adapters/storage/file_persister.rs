use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, VisitLogError};
use crate::core::models::file_update::FileUpdate;
use crate::core::models::log_file::LogFile;
use crate::core::traits::persister::Persister;

/// Persister backed by a directory on the local filesystem.
///
/// Every regular file in the directory, or symlink to one, is treated as
/// an audit file; subdirectories are skipped. Writes replace the whole file.
#[derive(Debug, Clone)]
pub struct FilePersister {
    directory: PathBuf,
}

impl FilePersister {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Return the directory this persister reads from and writes to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn storage_error(&self, path: &Path, detail: impl Into<String>) -> VisitLogError {
        VisitLogError::StorageError {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }
}

impl Persister for FilePersister {
    fn read_directory(&self) -> Result<Vec<LogFile>> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %self.directory.display(), "audit directory missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(self.storage_error(&self.directory, format!("cannot list: {e}")));
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            // Follow symlinks: apply_update writes through them too.
            let metadata = fs::metadata(&path)
                .map_err(|e| self.storage_error(&path, format!("cannot stat: {e}")))?;
            if !metadata.is_file() {
                continue;
            }

            let name = entry.file_name().into_string().map_err(|raw| {
                VisitLogError::InvalidFileName {
                    name: raw.to_string_lossy().into_owned(),
                }
            })?;

            let content = fs::read_to_string(&path)
                .map_err(|e| self.storage_error(&path, format!("cannot read: {e}")))?;
            let lines = content.lines().map(str::to_string).collect();

            files.push(LogFile::new(name, lines));
        }

        // read_dir order is platform dependent
        files.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(dir = %self.directory.display(), count = files.len(), "loaded audit files");

        Ok(files)
    }

    fn apply_update(&self, update: &FileUpdate) -> Result<()> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory)
                .map_err(|e| self.storage_error(&self.directory, format!("cannot create: {e}")))?;
        }

        let path = self.directory.join(&update.file_name);
        fs::write(&path, &update.new_content)
            .map_err(|e| self.storage_error(&path, format!("cannot write: {e}")))?;

        tracing::debug!(
            file = %path.display(),
            bytes = update.new_content.len(),
            "audit file written"
        );

        Ok(())
    }
}
