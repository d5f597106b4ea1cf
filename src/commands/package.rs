//! Package command implementation

use std::path::Path;

use console::style;
use tracing::info;

use super::helpers::{plan_targets, resolve_targets};
use crate::cli::PackageArgs;
use crate::copier::{CopyExecutor, CopyReport};
use crate::error::{Result, fs::missing_sources};
use crate::ui;

/// Run package command
///
/// Every target is planned before anything is copied. Missing source files
/// are reported per target and fail the run once all targets were copied;
/// the final error names every one of them, so `--quiet` still shows them.
pub fn run(task_file: Option<&Path>, quiet: bool, args: PackageArgs) -> Result<()> {
    let targets = resolve_targets(task_file, &args.extension)?;
    let planned = plan_targets(targets)?;

    let mut missing = Vec::new();
    for planned_target in &planned {
        let target = &planned_target.target;
        let executor = CopyExecutor::new(target.config.destination.clone());
        let mut progress = ui::reporter(quiet);

        info!(target = %target.label, destination = %target.config.destination, "Packaging");
        let report = executor.execute(&target.label, &planned_target.mapping, progress.as_mut())?;

        if !quiet {
            print_summary(&target.label, &target.config.destination, &report);
        }
        missing.extend(report.missing.into_iter().map(|entry| entry.source));
    }

    if !missing.is_empty() {
        return Err(missing_sources(missing));
    }
    Ok(())
}

fn print_summary(label: &str, destination: &str, report: &CopyReport) {
    if report.is_complete() {
        println!(
            "{} {}: {} entries copied to {}",
            style("✓").green().bold(),
            style(label).bold(),
            report.copied.len(),
            destination
        );
    } else {
        println!(
            "{} {}: {} entries copied to {}, {} missing",
            style("✗").red().bold(),
            style(label).bold(),
            report.copied.len(),
            destination,
            style(report.missing.len()).red()
        );
        for entry in &report.missing {
            println!("    {} {}", style("missing").yellow(), entry.source);
        }
    }
}
