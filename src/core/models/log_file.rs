use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::{Result, VisitLogError};

static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^audit_([0-9]+)\.([A-Za-z0-9]+)$").expect("file name pattern is valid")
});

/// One audit file as loaded from storage.
///
/// `lines` keeps write order: the first element is the oldest record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub name: String,
    pub lines: Vec<String>,
}

impl LogFile {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }
}

/// A parsed `audit_<N>.<ext>` identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileName {
    pub index: u32,
    pub extension: String,
}

impl FileName {
    pub fn new(index: u32, extension: impl Into<String>) -> Self {
        Self {
            index,
            extension: extension.into(),
        }
    }

    /// Parse a file name, requiring a positive index and the given extension.
    pub fn parse(name: &str, extension: &str) -> Result<Self> {
        let invalid = || VisitLogError::InvalidFileName {
            name: name.to_string(),
        };

        let caps = FILE_NAME_PATTERN.captures(name).ok_or_else(invalid)?;
        let index: u32 = caps[1].parse().map_err(|_| invalid())?;
        if index == 0 || &caps[2] != extension {
            return Err(invalid());
        }

        Ok(Self::new(index, extension))
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audit_{}.{}", self.index, self.extension)
    }
}
