//! Task file (extpack.yaml)
//!
//! A task file holds options shared by every target plus any number of named
//! targets, each of which selects one extension:
//!
//! ```yaml
//! options:
//!   root: /var/www/site
//!   destination: ./build
//! targets:
//!   hello:
//!     type: component
//!     name: hello
//!   cache:
//!     type: plugin
//!     name: cache
//!     group: system
//! ```
//!
//! Precedence, lowest first: built-in defaults, `options`, the target's own
//! options, command-line flags.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::RawOptions;
use crate::error::{
    Result,
    config::{parse_failed, read_failed, target_not_found},
};

/// Task file looked up in the working directory when `--config` is not given
pub const DEFAULT_TASK_FILE: &str = "extpack.yaml";

/// Parsed task file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskFile {
    #[serde(default)]
    pub options: RawOptions,
    #[serde(default)]
    pub targets: BTreeMap<String, RawOptions>,
}

/// One unit of work: merged options plus the target name it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageTarget {
    pub name: Option<String>,
    pub options: RawOptions,
}

impl PackageTarget {
    /// Label for log lines and summaries
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.options.name.as_deref())
            .unwrap_or("(unnamed)")
    }
}

impl TaskFile {
    /// Load a task file.
    ///
    /// An explicitly requested file must exist. Without one, the default
    /// `extpack.yaml` under `dir` is read if present, otherwise an empty task
    /// file is returned.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<TaskFile> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        let default_path = dir.join(DEFAULT_TASK_FILE);
        if default_path.is_file() {
            Self::read(&default_path)
        } else {
            Ok(TaskFile::default())
        }
    }

    fn read(path: &Path) -> Result<TaskFile> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| read_failed(&display, e.to_string()))?;
        Self::from_yaml(&content, &display)
    }

    /// Parse task file content; `origin` is used in error messages
    pub fn from_yaml(content: &str, origin: &str) -> Result<TaskFile> {
        if content.trim().is_empty() {
            return Ok(TaskFile::default());
        }
        serde_yaml::from_str(content).map_err(|e| parse_failed(origin, e.to_string()))
    }

    /// Shared options merged with one named target
    pub fn target(&self, name: &str) -> Result<RawOptions> {
        let target = self
            .targets
            .get(name)
            .ok_or_else(|| target_not_found(name))?;
        Ok(self.options.clone().merge(target.clone()))
    }

    /// Work out what to package.
    ///
    /// Named targets are used when given. Otherwise, when the command line does
    /// not select an extension itself, every target in the file is packaged in
    /// name order. Failing both, the shared options plus command-line flags form
    /// a single ad-hoc target.
    pub fn select(&self, names: &[String], cli: &RawOptions) -> Result<Vec<PackageTarget>> {
        if !names.is_empty() {
            return names
                .iter()
                .map(|name| {
                    Ok(PackageTarget {
                        name: Some(name.clone()),
                        options: self.target(name)?.merge(cli.clone()),
                    })
                })
                .collect();
        }

        if !cli.selects_extension() && !self.targets.is_empty() {
            return self
                .targets
                .keys()
                .map(|name| {
                    Ok(PackageTarget {
                        name: Some(name.clone()),
                        options: self.target(name)?.merge(cli.clone()),
                    })
                })
                .collect();
        }

        Ok(vec![PackageTarget {
            name: None,
            options: self.options.clone().merge(cli.clone()),
        }])
    }
}
