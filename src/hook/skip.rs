use crate::config::SkipConfig;

/// Path-based skip rules applied before a file is read.
///
/// Matching is case-insensitive substring containment against the whole
/// path, the cheapest filter that catches vendored trees, build output,
/// minified bundles and test files across ecosystems.
#[derive(Debug, Clone)]
pub struct SkipRules {
    patterns: Vec<String>,
    test_patterns: Vec<String>,
    skip_tests: bool,
}

impl SkipRules {
    #[must_use]
    pub fn from_config(config: &SkipConfig) -> Self {
        Self {
            patterns: config.patterns.iter().map(|p| p.to_lowercase()).collect(),
            test_patterns: config
                .test_patterns
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            skip_tests: config.skip_tests,
        }
    }

    /// Include test-file patterns in matching or not.
    #[must_use]
    pub const fn with_skip_tests(mut self, skip_tests: bool) -> Self {
        self.skip_tests = skip_tests;
        self
    }

    #[must_use]
    pub fn should_skip(&self, path: &str) -> bool {
        let lower = path.to_lowercase();
        if self.patterns.iter().any(|p| lower.contains(p)) {
            return true;
        }
        self.skip_tests && self.test_patterns.iter().any(|p| lower.contains(p))
    }
}

impl Default for SkipRules {
    fn default() -> Self {
        Self::from_config(&SkipConfig::default())
    }
}

#[cfg(test)]
#[path = "skip_tests.rs"]
mod tests;
