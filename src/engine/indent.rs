use crate::config::Thresholds;

use super::{Violation, ViolationKind};

/// Report at most one nesting violation per this many consecutive lines.
const BUCKET_LINES: usize = 10;

/// Assumed indent width when a file indents with spaces.
const SPACES_PER_LEVEL: usize = 4;

/// Estimate nesting depth from leading whitespace.
///
/// If the leading run contains any tab, depth is the tab count; otherwise it
/// is leading spaces divided by 4. A crude proxy: it does not parse braces or
/// `end` keywords and over- or under-counts for 2-space or brace-heavy files.
#[must_use]
pub fn indent_depth(line: &str) -> usize {
    let leading = &line[..line.len() - line.trim_start().len()];
    if leading.contains('\t') {
        leading.matches('\t').count()
    } else {
        leading.matches(' ').count() / SPACES_PER_LEVEL
    }
}

/// Scan all lines for indentation deeper than `max_nesting_depth`.
///
/// Blank lines carry no depth and are skipped. To keep the report readable,
/// at most one violation is emitted per contiguous 10-line bucket
/// (`line_index / 10`), even when every line in the bucket is too deep.
#[must_use]
pub fn check_nesting(lines: &[&str], thresholds: &Thresholds) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut reported_bucket = None;

    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let depth = indent_depth(line);
        if depth <= thresholds.max_nesting_depth {
            continue;
        }
        let bucket = i / BUCKET_LINES;
        if reported_bucket == Some(bucket) {
            continue;
        }
        reported_bucket = Some(bucket);
        violations.push(Violation {
            kind: ViolationKind::NestingTooDeep,
            start_line: i + 1,
            end_line: None,
            message: format!("nesting depth {depth}"),
            threshold: thresholds.max_nesting_depth,
        });
    }

    violations
}

#[cfg(test)]
#[path = "indent_tests.rs"]
mod tests;
