//! Plan command implementation

use std::path::Path;

use console::style;
use serde::Serialize;

use super::helpers::{PlannedTarget, plan_targets, resolve_targets};
use crate::cli::PlanArgs;
use crate::domain::MappingEntry;
use crate::error::Result;

#[derive(Serialize)]
struct PlanOutput<'a> {
    target: &'a str,
    kind: String,
    name: &'a str,
    destination: &'a str,
    mapping: &'a [MappingEntry],
}

/// Run plan command
pub fn run(task_file: Option<&Path>, args: PlanArgs) -> Result<()> {
    let targets = resolve_targets(task_file, &args.extension)?;
    let planned = plan_targets(targets)?;

    if args.json {
        println!("{}", render_json(&planned)?);
    } else {
        for planned_target in &planned {
            print_plan(planned_target);
        }
    }
    Ok(())
}

fn render_json(planned: &[PlannedTarget]) -> Result<String> {
    let output: Vec<PlanOutput<'_>> = planned
        .iter()
        .map(|p| PlanOutput {
            target: &p.target.label,
            kind: p.target.descriptor.kind.to_string(),
            name: &p.target.descriptor.name,
            destination: &p.target.config.destination,
            mapping: &p.mapping,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&output)?)
}

fn print_plan(planned: &PlannedTarget) {
    let target = &planned.target;
    println!(
        "{} {} ({} {}) -> {}",
        style("Target").green().bold(),
        style(&target.label).bold(),
        target.descriptor.kind,
        target.descriptor.name,
        target.config.destination
    );
    for entry in &planned.mapping {
        println!("  {} {} {}", entry.source, style("->").dim(), entry.destination);
    }
}
