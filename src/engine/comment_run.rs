use regex::Regex;

use crate::config::Thresholds;

use super::classify::classify;
use super::{Violation, ViolationKind};

/// A maximal run of contiguous comment lines that look like disabled code.
///
/// Lines are 1-indexed and `end_line` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRun {
    pub start_line: usize,
    pub end_line: usize,
}

impl CommentRun {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finds contiguous comment runs whose content resembles disabled source
/// code rather than prose.
///
/// The discriminator is keyword/punctuation density, not per-language
/// comment-block parsing: a line joins a run when it is comment-classified
/// and contains any of a fixed keyword/punctuation set.
pub struct CommentRunDetector {
    code_shape: Regex,
}

impl CommentRunDetector {
    /// # Panics
    /// Never in practice; the code-shape pattern is fixed and valid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            code_shape: Regex::new(
                r"(function|class|if|for|while|return|import|const|let|var|def |;|\{|\}|\(|\))",
            )
            .expect("Invalid code-shape pattern"),
        }
    }

    fn is_stale_line(&self, line: &str) -> bool {
        classify(line).is_comment_like() && self.code_shape.is_match(line.trim())
    }

    /// Return every maximal run of code-shaped comment lines, in order.
    ///
    /// Re-scanning the same lines yields identical boundaries.
    #[must_use]
    pub fn runs(&self, lines: &[&str]) -> Vec<CommentRun> {
        let mut runs = Vec::new();
        let mut open: Option<usize> = None;

        for (i, line) in lines.iter().enumerate() {
            if self.is_stale_line(line) {
                open.get_or_insert(i);
            } else if let Some(start) = open.take() {
                runs.push(CommentRun {
                    start_line: start + 1,
                    end_line: i,
                });
            }
        }

        if let Some(start) = open {
            runs.push(CommentRun {
                start_line: start + 1,
                end_line: lines.len(),
            });
        }

        runs
    }

    /// Flag runs at least `min_stale_comment_run` lines long.
    #[must_use]
    pub fn check(&self, lines: &[&str], thresholds: &Thresholds) -> Vec<Violation> {
        self.runs(lines)
            .into_iter()
            .filter(|run| run.len() >= thresholds.min_stale_comment_run)
            .map(|run| Violation {
                kind: ViolationKind::StaleCommentBlock,
                start_line: run.start_line,
                end_line: Some(run.end_line),
                message: format!("{} lines of commented-out code", run.len()),
                threshold: thresholds.min_stale_comment_run,
            })
            .collect()
    }
}

impl Default for CommentRunDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "comment_run_tests.rs"]
mod tests;
