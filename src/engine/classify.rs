/// Per-line lexical class.
///
/// `Ambiguous` covers lines whose trimmed text starts with a bare `*`: usually
/// the continuation of a block comment, but occasionally code (`*ptr = x;`).
/// Detectors that want the permissive reading treat it as comment-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Comment,
    Code,
    Ambiguous,
}

impl LineClass {
    /// Comment or probable block-comment continuation.
    #[must_use]
    pub const fn is_comment_like(self) -> bool {
        matches!(self, Self::Comment | Self::Ambiguous)
    }
}

/// Single-line and block-opening comment markers shared across the supported
/// language families. Extend this table, not the control flow, to grow
/// coverage.
const COMMENT_MARKERS: [&str; 4] = ["//", "#", "--", "/*"];

/// Classify one raw line. Pure function of the line text.
///
/// This is a per-line heuristic, not a comment-state machine: lines inside an
/// unmarked block comment classify as `Code`. Accepted limitation.
#[must_use]
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if COMMENT_MARKERS.iter().any(|m| trimmed.starts_with(m)) {
        return LineClass::Comment;
    }
    if trimmed.starts_with('*') {
        return LineClass::Ambiguous;
    }
    LineClass::Code
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
