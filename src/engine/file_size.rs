use crate::config::Thresholds;

use super::{Violation, ViolationKind};

/// Flag the file when its total line count strictly exceeds
/// `max_file_lines`. Exactly at the limit is fine.
#[must_use]
pub fn check_file_size(lines: &[&str], thresholds: &Thresholds) -> Vec<Violation> {
    let total = lines.len();
    if total <= thresholds.max_file_lines {
        return Vec::new();
    }
    vec![Violation {
        kind: ViolationKind::FileTooLong,
        start_line: 1,
        end_line: Some(total),
        message: format!("file is {total} lines"),
        threshold: thresholds.max_file_lines,
    }]
}

#[cfg(test)]
#[path = "file_size_tests.rs"]
mod tests;
