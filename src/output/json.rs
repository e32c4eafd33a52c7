use serde::Serialize;

use crate::engine::Violation;
use crate::error::Result;

use super::{FileReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    clean: usize,
    flagged: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    violations: &'a [Violation],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[FileReport]) -> Result<String> {
        let flagged = results.iter().filter(|r| r.has_violations()).count();

        let output = JsonOutput {
            summary: Summary {
                total_files: results.len(),
                clean: results.len() - flagged,
                flagged,
            },
            results: results
                .iter()
                .map(|r| FileResult {
                    path: r.path.display().to_string(),
                    violations: &r.report.violations,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
