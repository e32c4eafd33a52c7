//! Post-edit hook host: event parsing, skip rules and orchestration.
//!
//! The hook is advisory. Every input-level problem (non-mutating tool,
//! missing path, skipped file, unreadable content) resolves to `Skipped`,
//! never to an error, so a broken event can never block the host.

mod event;
mod skip;

pub use event::{HookEvent, ToolInput};
pub use skip::SkipRules;

use std::path::Path;

use crate::config::Config;
use crate::engine::{QualityScanner, ScanReport};

/// What the hook decided for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Nothing to scan: wrong tool, skipped path or unreadable file.
    Skipped,
    /// Scanned, no violations.
    Clean,
    /// Scanned and found violations to report.
    Violations { file_name: String, report: ScanReport },
}

/// Evaluate one tool-use event end to end.
///
/// Reads the edited file once (lossy UTF-8, so binary garbage degrades to
/// replacement characters instead of failing), scans it, and returns the
/// outcome for the caller to translate into exit codes and stderr output.
#[must_use]
pub fn evaluate_event(event: &HookEvent, config: &Config) -> HookOutcome {
    if !event.is_file_mutation() {
        return HookOutcome::Skipped;
    }

    let file_path = event.tool_input.file_path.as_str();
    if file_path.is_empty() {
        return HookOutcome::Skipped;
    }

    let rules = SkipRules::from_config(&config.skip);
    if rules.should_skip(file_path) {
        return HookOutcome::Skipped;
    }

    let path = Path::new(file_path);
    if !path.is_file() {
        return HookOutcome::Skipped;
    }

    let Ok(bytes) = std::fs::read(path) else {
        return HookOutcome::Skipped;
    };
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = content.lines().collect();

    let scanner = QualityScanner::new();
    let report = scanner.scan(&lines, &config.thresholds);

    if report.has_violations() {
        let file_name = path
            .file_name()
            .map_or_else(|| file_path.to_string(), |n| n.to_string_lossy().to_string());
        HookOutcome::Violations { file_name, report }
    } else {
        HookOutcome::Clean
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
