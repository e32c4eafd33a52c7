//! Heuristic, single-pass, line-oriented scan engine.
//!
//! No detector parses any language. Each one is a pure function over the
//! same borrowed line sequence, driven by small fixed signature tables
//! (comment markers, function starters, code-ish punctuation). The engine
//! performs no I/O and holds no state across calls, so the host may scan
//! files in parallel and abandon an in-progress scan at any point.

pub mod classify;
pub mod comment_run;
pub mod file_size;
pub mod function;
pub mod indent;

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::Serialize;

use crate::config::Thresholds;

pub use classify::{LineClass, classify};
pub use comment_run::{CommentRun, CommentRunDetector};
pub use file_size::check_file_size;
pub use function::{FunctionDetector, FunctionSpan};
pub use indent::{check_nesting, indent_depth};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    FunctionTooLong,
    NestingTooDeep,
    FileTooLong,
    StaleCommentBlock,
}

/// One reported quality violation. Immutable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// 1-indexed first line of the violation.
    pub start_line: usize,
    /// 1-indexed inclusive last line, for violations that span a range.
    pub end_line: Option<usize>,
    pub message: String,
    /// The threshold that was exceeded.
    pub threshold: usize,
}

impl Violation {
    /// Render as one report line: `  Line <start>[-<end>]: <message> (max <threshold>)`.
    #[must_use]
    pub fn render(&self) -> String {
        match self.end_line {
            Some(end) => format!(
                "  Line {}-{}: {} (max {})",
                self.start_line, end, self.message, self.threshold
            ),
            None => format!(
                "  Line {}: {} (max {})",
                self.start_line, self.message, self.threshold
            ),
        }
    }
}

/// Ordered scan output for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub violations: Vec<Violation>,
}

impl ScanReport {
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Runs every detector over one line sequence and merges the results.
///
/// Detector regexes are compiled once per scanner value; the scanner is
/// `Sync` and freely shared across threads.
pub struct QualityScanner {
    functions: FunctionDetector,
    comment_runs: CommentRunDetector,
}

impl QualityScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: FunctionDetector::new(),
            comment_runs: CommentRunDetector::new(),
        }
    }

    /// Scan one file's lines and collect violations in fixed order:
    /// function-size, nesting, file-size, comment-run.
    ///
    /// No deduplication across detectors; a line may appear in both a
    /// nesting and a stale-comment violation. Each detector call is
    /// fault-isolated, so a panic in one contributes nothing but never
    /// suppresses the others.
    #[must_use]
    pub fn scan(&self, lines: &[&str], thresholds: &Thresholds) -> ScanReport {
        let mut violations = Vec::new();
        violations.extend(isolate(|| self.functions.check(lines, thresholds)));
        violations.extend(isolate(|| check_nesting(lines, thresholds)));
        violations.extend(isolate(|| check_file_size(lines, thresholds)));
        violations.extend(isolate(|| self.comment_runs.check(lines, thresholds)));
        ScanReport { violations }
    }
}

impl Default for QualityScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one detector, discarding its output if it panics on degenerate input.
fn isolate<F>(detector: F) -> Vec<Violation>
where
    F: FnOnce() -> Vec<Violation>,
{
    catch_unwind(AssertUnwindSafe(detector)).unwrap_or_default()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
