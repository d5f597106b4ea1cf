//! Command helper utilities

use std::path::Path;

use tracing::info;

use crate::cli::ExtensionArgs;
use crate::config::{Configuration, TaskFile};
use crate::domain::{ExtensionDescriptor, MappingEntry};
use crate::error::{PackagerError, Result};
use crate::resolver;

/// A target with validated descriptor and resolved site paths
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub label: String,
    pub descriptor: ExtensionDescriptor,
    pub config: Configuration,
}

/// A resolved target together with its copy plan
#[derive(Debug, Clone)]
pub struct PlannedTarget {
    pub target: ResolvedTarget,
    pub mapping: Vec<MappingEntry>,
}

/// Load the task file and validate every selected target.
///
/// All targets are validated before any of them is used, so a bad option
/// aborts the run before any manifest is read.
pub fn resolve_targets(task_file: Option<&Path>, args: &ExtensionArgs) -> Result<Vec<ResolvedTarget>> {
    let cwd = std::env::current_dir().map_err(|e| PackagerError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })?;
    let file = TaskFile::load(task_file, &cwd)?;

    file.select(&args.targets, &args.to_options())?
        .into_iter()
        .map(|target| {
            let descriptor = ExtensionDescriptor::from_options(&target.options)?;
            Ok(ResolvedTarget {
                label: target.label().to_string(),
                descriptor,
                config: Configuration::resolve(&target.options),
            })
        })
        .collect()
}

/// Build the copy plan for every target; fails on the first structural error
pub fn plan_targets(targets: Vec<ResolvedTarget>) -> Result<Vec<PlannedTarget>> {
    targets
        .into_iter()
        .map(|target| {
            let mapping = resolver::plan(&target.descriptor, &target.config)?;
            info!(
                target = %target.label,
                kind = %target.descriptor.kind,
                entries = mapping.len(),
                "Planned"
            );
            Ok(PlannedTarget { target, mapping })
        })
        .collect()
}
