//! Progress presentation layer
//!
//! Copy progress goes through the [`ProgressReporter`] trait so the executor
//! does not care whether it runs under an interactive terminal, with
//! `--quiet`, or inside tests.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a copy run
pub trait ProgressReporter {
    /// Start a run for `target` with `total` mapping entries
    fn start(&mut self, target: &str, total: u64);

    /// One entry was processed (copied or found missing)
    fn advance(&mut self, destination: &str);

    /// Run finished
    fn finish(&mut self);

    /// Run aborted
    fn abandon(&mut self);
}

/// Interactive progress bar on stderr
#[derive(Default)]
pub struct InteractiveProgressReporter {
    bar: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, target: &str, total: u64) {
        let style = ProgressStyle::default_bar()
            .template("{prefix:.bold} [{bar:40.green/yellow}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");

        let bar = ProgressBar::new(total);
        bar.set_style(style);
        bar.set_prefix(target.to_string());
        self.bar = Some(bar);
    }

    fn advance(&mut self, destination: &str) {
        if let Some(ref bar) = self.bar {
            // Keep the tail of long paths, it is the informative part
            let display_path = if destination.chars().count() > 50 {
                let tail: String = destination
                    .chars()
                    .rev()
                    .take(47)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("...{}", tail)
            } else {
                destination.to_string()
            };
            bar.set_message(display_path);
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}

/// No-op reporter for `--quiet`, non-terminal output and tests
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _target: &str, _total: u64) {}

    fn advance(&mut self, _destination: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter for the current terminal
pub fn reporter(quiet: bool) -> Box<dyn ProgressReporter> {
    if quiet || !console::Term::stderr().is_term() {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}
