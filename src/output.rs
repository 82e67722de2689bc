//! Human-readable run output
//!
//! This module provides:
//! - The per-module header printed before a module is mutated
//! - The final run summary

use crate::domain::{Module, ModuleOutcome, RunSummary};
use colored::Colorize;
use std::io::Write;

/// Header printed before a module's tool invocations
pub fn module_header(module: &Module) -> String {
    format!("{} {}", "Updating".green().bold(), module.path().bold())
}

/// Text formatter for the run summary
pub struct TextReport {
    /// Whether to use colors
    color: bool,
}

impl TextReport {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a report with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, style: fn(&str) -> colored::ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write the summary of a completed run
    pub fn write(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} ({} @ {})",
            self.paint("Summary", |s| s.bold()),
            summary.pipeline,
            summary.version
        )?;

        for outcome in &summary.outcomes {
            match outcome {
                ModuleOutcome::Updated {
                    module,
                    dependencies,
                    ..
                } => {
                    writeln!(writer, "  {} {}", self.paint("✓", |s| s.green()), module)?;
                    for dependency in dependencies {
                        writeln!(writer, "      {}", self.paint(dependency, |s| s.dimmed()))?;
                    }
                }
                ModuleOutcome::Skipped { module } => {
                    writeln!(
                        writer,
                        "  {} {} {}",
                        self.paint("-", |s| s.dimmed()),
                        module,
                        self.paint("(nothing to update)", |s| s.dimmed())
                    )?;
                }
            }
        }

        let updated = summary.updated().count();
        let skipped = summary.skipped().count();
        writeln!(
            writer,
            "{} module(s) updated, {} skipped, {} tool invocation(s)",
            self.paint(&updated.to_string(), |s| s.cyan().bold()),
            skipped,
            summary.total_invocations()
        )
    }
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}
