//! File system errors

use std::path::Path;

use super::PackagerError;

/// Creates a copy failed error
pub fn copy_failed(source: &Path, destination: &Path, err: &std::io::Error) -> PackagerError {
    PackagerError::CopyFailed {
        path: source.display().to_string(),
        target: destination.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates the aggregated missing sources error
pub fn missing_sources(sources: Vec<String>) -> PackagerError {
    PackagerError::MissingSources {
        count: sources.len(),
        sources,
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> PackagerError {
    PackagerError::IoError {
        message: message.into(),
    }
}
