use serde::{Deserialize, Serialize};

use crate::error::{QualityGuardError, Result};

/// Scan thresholds, passed explicitly into every scan call.
///
/// Defaults: 50-line functions, nesting depth 4, 500-line files, stale
/// comment runs of 10+ lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thresholds {
    /// Maximum lines attributed to a single function.
    #[serde(default = "default_max_function_lines")]
    pub max_function_lines: usize,

    /// Maximum indentation-derived nesting depth.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,

    /// Maximum total lines per file.
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,

    /// Minimum length of a code-shaped comment run to flag as stale.
    #[serde(default = "default_min_stale_comment_run")]
    pub min_stale_comment_run: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_function_lines: default_max_function_lines(),
            max_nesting_depth: default_max_nesting_depth(),
            max_file_lines: default_max_file_lines(),
            min_stale_comment_run: default_min_stale_comment_run(),
        }
    }
}

/// Path-based skip rules applied before any file content is read.
///
/// Patterns are matched as case-insensitive substrings of the path.
/// Test-file patterns live in their own list so they can be toggled
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkipConfig {
    /// Vendored/generated/minified path fragments.
    #[serde(default = "default_skip_patterns")]
    pub patterns: Vec<String>,

    /// Test-file path fragments.
    #[serde(default = "default_test_patterns")]
    pub test_patterns: Vec<String>,

    /// Whether test-file patterns are applied (default: true).
    #[serde(default = "default_true")]
    pub skip_tests: bool,
}

impl Default for SkipConfig {
    fn default() -> Self {
        Self {
            patterns: default_skip_patterns(),
            test_patterns: default_test_patterns(),
            skip_tests: true,
        }
    }
}

/// Settings for the standalone `check` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// File extensions to scan.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Exclude patterns (glob syntax).
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules when walking directories (default: true).
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            gitignore: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub skip: SkipConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

impl Config {
    /// Validate semantic correctness beyond what serde enforces.
    ///
    /// # Errors
    /// Returns a `Config` error naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.thresholds.max_function_lines == 0 {
            return Err(QualityGuardError::Config(
                "thresholds.max_function_lines must be at least 1".to_string(),
            ));
        }
        if self.thresholds.max_file_lines == 0 {
            return Err(QualityGuardError::Config(
                "thresholds.max_file_lines must be at least 1".to_string(),
            ));
        }
        if self.thresholds.min_stale_comment_run == 0 {
            return Err(QualityGuardError::Config(
                "thresholds.min_stale_comment_run must be at least 1".to_string(),
            ));
        }
        for pattern in &self.check.exclude {
            globset::Glob::new(pattern).map_err(|e| QualityGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}

const fn default_max_function_lines() -> usize {
    50
}

const fn default_max_nesting_depth() -> usize {
    4
}

const fn default_max_file_lines() -> usize {
    500
}

const fn default_min_stale_comment_run() -> usize {
    10
}

const fn default_true() -> bool {
    true
}

fn default_skip_patterns() -> Vec<String> {
    [
        "node_modules",
        "vendor",
        "dist/",
        "build/",
        ".min.",
        "__pycache__",
        ".pyc",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_test_patterns() -> Vec<String> {
    ["test", "spec", "_test.go", "_spec.rb", ".test.", ".spec."]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_extensions() -> Vec<String> {
    [
        "rs", "go", "py", "js", "jsx", "ts", "tsx", "c", "cpp", "java", "rb", "php", "swift", "kt",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_exclude() -> Vec<String> {
    [
        "**/target/**",
        "**/node_modules/**",
        "**/.git/**",
        "**/vendor/**",
        "**/dist/**",
        "**/build/**",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
