//! Copy executor
//!
//! Applies a mapping to the staging directory. Every entry is attempted in
//! order; a missing source is logged and recorded, not fatal, so a single run
//! reports every missing file. Copies overwrite, so a later entry wins when two
//! entries share a destination.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::MappingEntry;
use crate::error::{
    Result,
    fs::{copy_failed, io_error},
};
use crate::ui::ProgressReporter;

/// Outcome of a copy run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Entries whose source was copied
    pub copied: Vec<MappingEntry>,
    /// Entries whose source did not exist
    pub missing: Vec<MappingEntry>,
}

impl CopyReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Copies mapping entries below a staging root
#[derive(Debug, Clone)]
pub struct CopyExecutor {
    destination_root: String,
}

impl CopyExecutor {
    pub fn new(destination_root: impl Into<String>) -> Self {
        Self {
            destination_root: destination_root.into(),
        }
    }

    /// Where an entry lands: the staging root followed by the entry destination
    pub fn target_path(&self, entry: &MappingEntry) -> PathBuf {
        PathBuf::from(format!("{}{}", self.destination_root, entry.destination))
    }

    /// Copy every entry, in order.
    ///
    /// Returns `Err` only for I/O failures on sources that do exist; missing
    /// sources end up in [`CopyReport::missing`].
    pub fn execute(
        &self,
        label: &str,
        entries: &[MappingEntry],
        progress: &mut dyn ProgressReporter,
    ) -> Result<CopyReport> {
        progress.start(label, entries.len() as u64);

        let result = entries
            .iter()
            .try_fold(CopyReport::default(), |mut report, entry| -> Result<CopyReport> {
                self.copy_entry(entry, &mut report)?;
                progress.advance(&entry.destination);
                Ok(report)
            });

        match result {
            Ok(report) => {
                progress.finish();
                Ok(report)
            }
            Err(err) => {
                progress.abandon();
                Err(err)
            }
        }
    }

    fn copy_entry(&self, entry: &MappingEntry, report: &mut CopyReport) -> Result<()> {
        let source = Path::new(&entry.source);
        let target = self.target_path(entry);

        if source.is_dir() {
            debug!(source = %entry.source, "Copying folder");
            copy_dir(source, &target)?;
        } else if source.is_file() {
            debug!(source = %entry.source, "Copying file");
            copy_file(source, &target)?;
        } else {
            warn!("File does not exist: {}", entry.source);
            report.missing.push(entry.clone());
            return Ok(());
        }

        report.copied.push(entry.clone());
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| io_error(format!("Failed to create {}: {}", parent.display(), e)))?;
    }
    Ok(())
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    fs::copy(source, target)
        .map(|_| ())
        .map_err(|e| copy_failed(source, target, &e))
}

/// Recursively copy a directory, merging into an existing target
fn copy_dir(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| io_error(format!("Failed to walk {}: {}", source.display(), e)))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io_error(e.to_string()))?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination).map_err(|e| copy_failed(entry.path(), &destination, &e))?;
        } else {
            copy_file(entry.path(), &destination)?;
        }
    }
    Ok(())
}
