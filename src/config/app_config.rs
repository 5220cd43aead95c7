use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, VisitLogError};

/// Name of the configuration file inside the `.visitlog` directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Default configuration written by `visitlog init`.
pub const DEFAULT_CONFIG: &str = r#"[visitlog]
version = "0.1.0"
format_version = 1

[storage]
directory = "audit"
max_entries = 3
extension = "txt"
"#;

/// Top-level configuration read from `.visitlog/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub visitlog: VisitLogSection,
    #[serde(default)]
    pub storage: StorageSection,
}

impl AppConfig {
    /// Load the configuration from `{visitlog_dir}/config.toml`.
    ///
    /// After parsing, validates the format version, the capacity and the
    /// file extension.
    pub fn load(visitlog_dir: &Path) -> Result<Self> {
        let config_path = visitlog_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Err(VisitLogError::InvalidConfig {
                detail: format!(
                    "{} not found. Run 'visitlog init' first.",
                    config_path.display()
                ),
            });
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::parse(&content)?;

        tracing::debug!(path = %config_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| VisitLogError::InvalidConfig {
            detail: format!("Failed to parse {CONFIG_FILE}: {e}"),
        })?;

        if config.visitlog.format_version > CURRENT_FORMAT_VERSION {
            return Err(VisitLogError::FormatVersionTooNew {
                project_version: config.visitlog.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        if config.storage.max_entries == 0 {
            return Err(VisitLogError::InvalidConfig {
                detail: "storage.max_entries must be at least 1".into(),
            });
        }

        validate_extension(&config.storage.extension)?;

        Ok(config)
    }

    /// Resolve the audit directory. Relative paths are taken from `visitlog_dir`.
    pub fn audit_dir(&self, visitlog_dir: &Path) -> PathBuf {
        let dir = Path::new(&self.storage.directory);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            visitlog_dir.join(dir)
        }
    }
}

/// Current config format version supported by this build.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// The `[visitlog]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitLogSection {
    pub version: String,
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
}

fn default_format_version() -> u32 {
    1
}

/// The `[storage]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            max_entries: default_max_entries(),
            extension: default_extension(),
        }
    }
}

fn default_directory() -> String {
    "audit".to_string()
}

fn default_max_entries() -> usize {
    3
}

fn default_extension() -> String {
    "txt".to_string()
}

/// An extension must be non-empty ASCII alphanumerics, so that every
/// generated file name stays inside the audit directory.
fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(VisitLogError::InvalidConfig {
            detail: format!(
                "storage.extension '{extension}' must contain only letters and digits"
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.storage.directory, "audit");
        assert_eq!(config.storage.max_entries, 3);
        assert_eq!(config.storage.extension, "txt");
    }

    #[test]
    fn storage_section_is_optional() {
        let config = AppConfig::parse("[visitlog]\nversion = \"0.1.0\"\n").unwrap();
        assert_eq!(config.storage.max_entries, 3);
    }

    #[test]
    fn missing_format_version_defaults_to_current() {
        let config = AppConfig::parse("[visitlog]\nversion = \"0.1.0\"\n").unwrap();
        assert_eq!(config.visitlog.format_version, CURRENT_FORMAT_VERSION);
        assert_eq!(config.visitlog.version, "0.1.0");
    }

    #[test]
    fn newer_format_version_is_rejected() {
        let err = AppConfig::parse("[visitlog]\nversion = \"9.0.0\"\nformat_version = 2\n")
            .unwrap_err();
        assert!(matches!(
            err,
            VisitLogError::FormatVersionTooNew {
                project_version: 2,
                supported_version: 1
            }
        ));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = AppConfig::parse(
            "[visitlog]\nversion = \"0.1.0\"\n[storage]\nmax_entries = 0\n",
        )
        .unwrap_err();
        assert!(matches!(err, VisitLogError::InvalidConfig { .. }));
    }

    #[test]
    fn extension_with_path_characters_is_rejected() {
        let err = AppConfig::parse(
            "[visitlog]\nversion = \"0.1.0\"\n[storage]\nextension = \"txt/../x\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, VisitLogError::InvalidConfig { .. }));
    }

    #[test]
    fn relative_directory_resolves_under_visitlog_dir() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            config.audit_dir(Path::new(".visitlog")),
            Path::new(".visitlog").join("audit")
        );
    }

    #[test]
    fn load_missing_config_points_to_init() {
        let tmp = TempDir::new().unwrap();
        let err = AppConfig::load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("visitlog init"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), DEFAULT_CONFIG).unwrap();
        assert!(AppConfig::load(tmp.path()).is_ok());
    }
}
