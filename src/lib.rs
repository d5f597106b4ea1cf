//! extpack - repackage installed CMS extensions
//!
//! Reads an installed extension's manifest, resolves every file, folder,
//! language and media entry it declares to a `(source, destination)` pair, and
//! copies them into a staging directory laid out for the extension installer.
//!
//! The pieces, in data-flow order:
//! - [`config`]: task options and the two-pass path resolution
//! - [`resolver::paths`]: where each extension kind keeps its manifest and files
//! - [`resolver`]: manifest tree to ordered mapping
//! - [`copier`]: applies a mapping to the staging directory

pub mod cli;
pub mod commands;
pub mod config;
pub mod copier;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod path_utils;
pub mod resolver;
pub mod ui;

pub use config::{Configuration, RawOptions};
pub use domain::{ExtensionDescriptor, ExtensionKind, MappingEntry};
pub use error::{PackagerError, Result};
pub use manifest::ManifestDocument;
pub use resolver::build_mapping;
