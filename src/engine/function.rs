use regex::Regex;

use crate::config::Thresholds;

use super::{Violation, ViolationKind};

/// The line range heuristically attributed to one function or method.
///
/// Lines are 1-indexed and `end_line` is inclusive. A span runs from its
/// start signature to the line before the next recognized start, or to the
/// end of the file, so trailing blank and comment lines before the next
/// declaration count toward the span. Accepted noise in exchange for
/// language-independence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpan {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl FunctionSpan {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Detects function boundaries from start signatures alone.
///
/// One signature family per declaration idiom: `def `/`function `/`async
/// function`, arrow-style `const|let|var NAME = ...`, bare `func `, and
/// visibility-qualified method signatures. No block-closing tokens are
/// tracked; a new start implicitly closes the previous span.
pub struct FunctionDetector {
    start_pattern: Regex,
    name_pattern: Regex,
}

impl FunctionDetector {
    /// # Panics
    /// Never in practice; the signature patterns are fixed and valid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_pattern: Regex::new(
                r"^\s*(?:def |function |async function|(?:export\s+)?(?:async\s+)?(?:function\s+)?(?:const|let|var)\s+\w+\s*=\s*(?:async\s*)?\(?|func |(?:public|private|protected)\s+(?:static\s+)?(?:async\s+)?\w+\s*\()",
            )
            .expect("Invalid function start pattern"),
            name_pattern: Regex::new(r"(?:def|function|func|const|let|var)\s+(\w+)")
                .expect("Invalid name pattern"),
        }
    }

    /// Whether the line matches any known function-start signature.
    #[must_use]
    pub fn is_start(&self, line: &str) -> bool {
        self.start_pattern.is_match(line)
    }

    /// Scan the full line sequence once and return all inferred spans.
    ///
    /// Exactly one span is produced per recognized start; spans never overlap
    /// and cover from each start to the next (or EOF).
    #[must_use]
    pub fn detect(&self, lines: &[&str]) -> Vec<FunctionSpan> {
        let mut spans = Vec::new();
        let mut open: Option<(usize, String)> = None;

        for (i, line) in lines.iter().enumerate() {
            if !self.is_start(line) {
                continue;
            }
            if let Some((start, name)) = open.take() {
                spans.push(FunctionSpan {
                    name,
                    start_line: start + 1,
                    end_line: i,
                });
            }
            open = Some((i, self.extract_name(line)));
        }

        if let Some((start, name)) = open {
            spans.push(FunctionSpan {
                name,
                start_line: start + 1,
                end_line: lines.len(),
            });
        }

        spans
    }

    /// Check all spans against `max_function_lines`.
    #[must_use]
    pub fn check(&self, lines: &[&str], thresholds: &Thresholds) -> Vec<Violation> {
        self.detect(lines)
            .into_iter()
            .filter(|span| span.len() > thresholds.max_function_lines)
            .map(|span| Violation {
                kind: ViolationKind::FunctionTooLong,
                start_line: span.start_line,
                end_line: None,
                message: format!("function '{}' is {} lines", span.name, span.len()),
                threshold: thresholds.max_function_lines,
            })
            .collect()
    }

    /// Best-effort name extraction: the first identifier after a recognized
    /// keyword, or `anonymous`. Never aborts the scan.
    fn extract_name(&self, line: &str) -> String {
        self.name_pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map_or_else(|| "anonymous".to_string(), |m| m.as_str().to_string())
    }
}

impl Default for FunctionDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "function_tests.rs"]
mod tests;
