use std::path::PathBuf;

use super::*;
use crate::engine::{ScanReport, Violation, ViolationKind};

fn sample() -> Vec<FileReport> {
    vec![
        FileReport {
            path: PathBuf::from("src/app.py"),
            report: ScanReport {
                violations: vec![Violation {
                    kind: ViolationKind::NestingTooDeep,
                    start_line: 42,
                    end_line: None,
                    message: "nesting depth 5".to_string(),
                    threshold: 4,
                }],
            },
        },
        FileReport {
            path: PathBuf::from("src/ok.py"),
            report: ScanReport::default(),
        },
    ]
}

#[test]
fn json_output_is_valid_and_complete() {
    let output = JsonFormatter.format(&sample()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_files"], 2);
    assert_eq!(parsed["summary"]["clean"], 1);
    assert_eq!(parsed["summary"]["flagged"], 1);

    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["path"], "src/app.py");

    let violation = &results[0]["violations"][0];
    assert_eq!(violation["kind"], "nesting_too_deep");
    assert_eq!(violation["start_line"], 42);
    assert_eq!(violation["end_line"], serde_json::Value::Null);
    assert_eq!(violation["message"], "nesting depth 5");
    assert_eq!(violation["threshold"], 4);
}

#[test]
fn clean_files_have_empty_violation_arrays() {
    let output = JsonFormatter.format(&sample()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed["results"][1]["violations"].as_array().unwrap().is_empty());
}
