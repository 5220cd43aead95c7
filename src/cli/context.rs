use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::adapters::storage::file_persister::FilePersister;
use crate::config::app_config::AppConfig;
use crate::core::errors::{Result, VisitLogError};
use crate::core::services::audit_manager::AuditManager;
use crate::core::services::audit_service::AuditService;

static VISITLOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static MAX_ENTRIES: OnceLock<usize> = OnceLock::new();

/// Initialize the global visitlog directory path and capacity override.
/// If `custom` is not provided, defaults to `.visitlog`.
pub fn init(custom: Option<&str>, max_entries: Option<usize>) {
    let dir = custom
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".visitlog"));
    let _ = VISITLOG_DIR.set(dir);
    if let Some(n) = max_entries {
        let _ = MAX_ENTRIES.set(n);
    }
}

/// Get the current visitlog directory path.
pub fn visitlog_dir() -> &'static Path {
    VISITLOG_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(".visitlog"))
}

/// Load the configuration, failing with a hint when the project is not initialized.
pub fn load_config() -> Result<AppConfig> {
    let dir = visitlog_dir();
    if !dir.exists() {
        return Err(VisitLogError::InvalidConfig {
            detail: "visitlog not initialized. Run 'visitlog init' first.".into(),
        });
    }
    AppConfig::load(dir)
}

/// Build the audit service for the configured directory.
///
/// `--max-entries` takes precedence over `storage.max_entries`.
pub fn audit_service(config: &AppConfig) -> Result<AuditService<FilePersister>> {
    let capacity = MAX_ENTRIES
        .get()
        .copied()
        .unwrap_or(config.storage.max_entries);

    Ok(AuditService {
        persister: FilePersister::new(config.audit_dir(visitlog_dir())),
        manager: AuditManager::new(capacity, config.storage.extension.as_str())?,
    })
}
