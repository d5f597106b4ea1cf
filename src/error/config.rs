//! Configuration errors

use super::PackagerError;

/// Creates a missing option error
pub fn missing_option(key: impl Into<String>) -> PackagerError {
    PackagerError::MissingOption { key: key.into() }
}

/// Creates an unsupported extension type error
pub fn unsupported_kind(kind: impl Into<String>) -> PackagerError {
    PackagerError::UnsupportedKind { kind: kind.into() }
}

/// Creates a missing group error
pub fn missing_group(kind: impl Into<String>, name: impl Into<String>) -> PackagerError {
    PackagerError::MissingGroup {
        kind: kind.into(),
        name: name.into(),
    }
}

/// Creates a task file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PackagerError {
    PackagerError::TaskFileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a task file parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PackagerError {
    PackagerError::TaskFileParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a target not found error
pub fn target_not_found(name: impl Into<String>) -> PackagerError {
    PackagerError::TargetNotFound { name: name.into() }
}
