//! Apply step: run every injector against the selected theme.
//!
//! Injectors run in order. Under [`ErrorPolicy::Abort`] the first failure
//! stops the run; injectors that already ran stay written. Under
//! [`ErrorPolicy::Continue`] failures are recorded and the run goes on.

use std::path::PathBuf;

use crate::config::ErrorPolicy;
use crate::error::InjectError;
use crate::inject::{Injector, Outcome};
use crate::theme::Theme;
use crate::ui::RenderSink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Compute everything, write nothing (no backups either).
    pub dry_run: bool,
    pub on_error: ErrorPolicy,
}

/// Result of one injector.
#[derive(Debug)]
pub struct ApplyEntry {
    pub name: String,
    pub target: PathBuf,
    pub result: Result<Outcome, InjectError>,
}

#[derive(Debug, Default)]
pub struct ApplyReport {
    pub entries: Vec<ApplyEntry>,
    /// Set when a failure stopped the run early.
    pub aborted: bool,
}

impl ApplyReport {
    pub fn failures(&self) -> impl Iterator<Item = &ApplyEntry> {
        self.entries.iter().filter(|entry| entry.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Count of entries with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.result, Ok(o) if o == outcome))
            .count()
    }
}

pub fn apply_theme(theme: &Theme, injectors: &[Injector], options: &ApplyOptions) -> ApplyReport {
    let mut report = ApplyReport::default();
    for injector in injectors {
        let result = injector.apply(theme, options.dry_run);
        match &result {
            Ok(outcome) => tracing::info!(
                injector = %injector.name(),
                target = %injector.target().display(),
                outcome = ?outcome,
                "injector applied"
            ),
            Err(err) => tracing::warn!(
                injector = %injector.name(),
                target = %injector.target().display(),
                error = %err,
                "injector failed"
            ),
        }
        let failed = result.is_err();
        report.entries.push(ApplyEntry {
            name: injector.name().to_string(),
            target: injector.target().to_path_buf(),
            result,
        });
        if failed && options.on_error == ErrorPolicy::Abort {
            report.aborted = true;
            break;
        }
    }
    report
}

/// Render one row per injector plus a summary line.
pub fn render_report(sink: &dyn RenderSink, report: &ApplyReport) {
    for entry in &report.entries {
        match &entry.result {
            Ok(Outcome::Written) => sink.field(&entry.name, "updated"),
            Ok(Outcome::Unchanged) => sink.field(&entry.name, "unchanged"),
            Ok(Outcome::WouldWrite) => sink.field(&entry.name, "would update"),
            Err(err) => sink.error(&format!("injector `{}`: {err}", entry.name)),
        }
    }
    let failed = report.failures().count();
    if report.aborted {
        sink.warn("stopped at the first failing injector; earlier targets were already written");
    } else if failed > 0 {
        sink.warn(&format!("{failed} injector(s) failed"));
    }
}
