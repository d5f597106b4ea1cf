//! Manifest errors

use super::PackagerError;

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PackagerError {
    PackagerError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PackagerError {
    PackagerError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed manifest error for a document whose root is not `<extension>`
pub fn malformed(root: impl Into<String>) -> PackagerError {
    PackagerError::MalformedManifest { root: root.into() }
}

/// Creates an error for an entry whose destination leaves the staging root
pub fn escaping_destination(destination: impl Into<String>) -> PackagerError {
    PackagerError::EscapingDestination {
        destination: destination.into(),
    }
}

/// Creates an error for a `<language>` entry without a `tag` attribute
pub fn malformed_language_entry(filename: impl Into<String>) -> PackagerError {
    PackagerError::MalformedLanguageEntry {
        filename: filename.into(),
    }
}
