use std::path::PathBuf;

/// All domain errors for visitlog.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum VisitLogError {
    #[error(
        "Unexpected file in audit directory: {name}\n\n  \
         Audit files must be named audit_<N>.<ext> with N >= 1 and the\n  \
         extension configured in .visitlog/config.toml.\n  \
         Move the file out of the audit directory and try again."
    )]
    InvalidFileName { name: String },

    #[error(
        "Duplicate audit file index: {index}\n\n  \
         Two files in the audit directory share index {index}.\n  \
         Remove or rename one of them before adding new records."
    )]
    DuplicateIndex { index: u32 },

    #[error("Audit file index {index} cannot be rotated further")]
    IndexExhausted { index: u32 },

    #[error(
        "Invalid date or time: '{value}'\n\n  \
         Timestamps use YYYY-MM-DDTHH:MM:SS, e.g. 2019-04-06T16:30:00\n  \
         Dates use YYYY-MM-DD, e.g. 2019-04-06"
    )]
    InvalidTimestamp { value: String },

    #[error(
        "Malformed record in {file} at line {line}\n\n  \
         Expected format: name;YYYY-MM-DDTHH:MM:SS (one per line)."
    )]
    MalformedRecord { file: String, line: usize },

    #[error("Invalid record: {detail}")]
    InvalidRecord { detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Storage error at {path}: {detail}")]
    StorageError { path: PathBuf, detail: String },

    #[error(
        "This project uses format version {project_version}, but this visitlog \
         only supports up to version {supported_version}.\n\n  \
         Update visitlog to a newer release."
    )]
    FormatVersionTooNew {
        project_version: u32,
        supported_version: u32,
    },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VisitLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_convert_to_json_variant() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: VisitLogError = source.into();

        assert!(matches!(err, VisitLogError::Json(_)));
        assert!(err.to_string().starts_with("JSON output failed:"));
    }

    #[test]
    fn io_errors_stay_transparent() {
        let err: VisitLogError = std::io::Error::other("disk full").into();
        assert_eq!(err.to_string(), "disk full");
    }
}
