use std::io::Write as IoWrite;

use crate::error::Result;

use super::{FileReport, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_file(&self, result: &FileReport, output: &mut Vec<u8>) {
        if result.has_violations() {
            let status = self.colorize("ISSUES", ansi::RED);
            writeln!(output, "✗ {status}: {}", result.path.display()).ok();
            for violation in &result.report.violations {
                writeln!(output, "{}", violation.render()).ok();
            }
        } else {
            let status = self.colorize("CLEAN", ansi::GREEN);
            writeln!(output, "✓ {status}: {}", result.path.display()).ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[FileReport]) -> Result<String> {
        let mut output = Vec::new();

        let (flagged, clean): (Vec<_>, Vec<_>) =
            results.iter().partition(|r| r.has_violations());

        for result in &flagged {
            self.format_file(result, &mut output);
            writeln!(output).ok();
        }

        // Show clean files only in verbose mode
        if self.verbose >= 1 {
            for result in &clean {
                self.format_file(result, &mut output);
            }
            if !clean.is_empty() {
                writeln!(output).ok();
            }
        }

        let flagged_str = self.colorize(&flagged.len().to_string(), ansi::RED);
        let clean_str = self.colorize(&clean.len().to_string(), ansi::GREEN);
        writeln!(
            output,
            "Summary: {} files checked, {clean_str} clean, {flagged_str} with issues",
            results.len()
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
