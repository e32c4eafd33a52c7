use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{QualityGuardError, Result};
use crate::hook::SkipRules;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Extension allow-list plus glob excludes, with the hook's substring skip
/// rules layered on top so `check` and `hook` agree on what gets scanned.
pub struct GlobFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
    skip_rules: Option<SkipRules>,
}

impl GlobFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| QualityGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| QualityGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            exclude_patterns,
            skip_rules: None,
        })
    }

    /// Also exclude paths matched by the hook's skip rules.
    #[must_use]
    pub fn with_skip_rules(mut self, rules: SkipRules) -> Self {
        self.skip_rules = Some(rules);
        self
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_patterns.is_match(path) {
            return true;
        }
        self.skip_rules
            .as_ref()
            .is_some_and(|rules| rules.should_skip(&path.to_string_lossy()))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
