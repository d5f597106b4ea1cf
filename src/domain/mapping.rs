//! Mapping entries

use std::fmt;

use serde::Serialize;

/// One file or folder to copy into the staging directory.
///
/// `source` is a path on the installed site. `destination` is relative to the
/// staging root and always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub source: String,
    pub destination: String,
}

impl MappingEntry {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for MappingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
