//! Error types and handling for extpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into three groups:
//! - [`config`]: missing or invalid task options, task file problems
//! - [`manifest`]: unreadable manifests, missing `<extension>` root, bad `<language>` entries
//! - [`fs`]: copy failures and the aggregated missing-source status
//!
//! Configuration and manifest errors abort before anything is copied. A missing
//! source file is only a warning while copying; the run ends with
//! [`PackagerError::MissingSources`] once every entry has been attempted.

pub mod config;
pub mod fs;
pub mod manifest;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for extpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum PackagerError {
    // Configuration errors
    #[error("Missing required option: {key}")]
    #[diagnostic(
        code(extpack::config::missing_option),
        help("Set it under options or a target in extpack.yaml, or pass it as a command-line flag")
    )]
    MissingOption { key: String },

    #[error("Invalid option value: type '{kind}'")]
    #[diagnostic(
        code(extpack::config::unsupported_kind),
        help("Supported types: component, module, plugin, template, language, file, library, package")
    )]
    UnsupportedKind { kind: String },

    #[error("Extension '{name}' of type {kind} requires a group")]
    #[diagnostic(
        code(extpack::config::missing_group),
        help("Plugins live under plugins/<group>/<name>; pass --group (e.g. system, content)")
    )]
    MissingGroup { kind: String, name: String },

    #[error("Failed to read task file: {path}")]
    #[diagnostic(code(extpack::config::read_failed))]
    TaskFileReadFailed { path: String, reason: String },

    #[error("Failed to parse task file: {path}: {reason}")]
    #[diagnostic(code(extpack::config::parse_failed))]
    TaskFileParseFailed { path: String, reason: String },

    #[error("Target '{name}' not found in task file")]
    #[diagnostic(
        code(extpack::config::target_not_found),
        help("List the targets under 'targets:' in extpack.yaml")
    )]
    TargetNotFound { name: String },

    // Manifest errors
    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(
        code(extpack::manifest::read_failed),
        help("Check that the extension is installed and that root/type/name/group are correct")
    )]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(code(extpack::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Malformed XML: <extension> missing (found <{root}>)")]
    #[diagnostic(code(extpack::manifest::malformed))]
    MalformedManifest { root: String },

    #[error("<language> tag must contain a 'tag' attribute: {filename}")]
    #[diagnostic(
        code(extpack::manifest::language_entry),
        help("Write language entries as <language tag=\"en-GB\">en-GB/en-GB.ext.ini</language>")
    )]
    MalformedLanguageEntry { filename: String },

    #[error("Manifest entry escapes the staging directory: {destination}")]
    #[diagnostic(
        code(extpack::manifest::escaping_destination),
        help("Manifest file names must not contain '..' path components")
    )]
    EscapingDestination { destination: String },

    // File system errors
    #[error("Failed to copy {path} to {target}: {reason}")]
    #[diagnostic(code(extpack::fs::copy_failed))]
    CopyFailed {
        path: String,
        target: String,
        reason: String,
    },

    #[error("{count} mapped source file(s) do not exist: {}", .sources.join(", "))]
    #[diagnostic(
        code(extpack::fs::missing_sources),
        help("Check that the extension is fully installed; the manifest lists files the site does not have")
    )]
    MissingSources { count: usize, sources: Vec<String> },

    #[error("IO error: {message}")]
    #[diagnostic(code(extpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PackagerError {
    fn from(err: std::io::Error) -> Self {
        PackagerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PackagerError {
    fn from(err: serde_yaml::Error) -> Self {
        PackagerError::TaskFileParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PackagerError {
    fn from(err: serde_json::Error) -> Self {
        PackagerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PackagerError>;
