use std::fs;

use tempfile::TempDir;

use super::*;
use crate::scanner::GlobFilter;

fn touch(dir: &TempDir, relative: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(&path, "x\n").expect("Failed to write file");
}

#[test]
fn scans_matching_files_recursively() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "src/main.rs");
    touch(&dir, "src/deep/module.rs");
    touch(&dir, "README.md");

    let filter = GlobFilter::new(vec!["rs".to_string()], &[]).unwrap();
    let scanner = DirectoryScanner::new(filter);
    let mut files = scanner.scan(dir.path()).unwrap();
    files.sort();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() == "rs"));
}

#[test]
fn scanning_a_single_file_honors_the_filter() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "lone.rs");
    touch(&dir, "lone.md");

    let filter = GlobFilter::new(vec!["rs".to_string()], &[]).unwrap();
    let scanner = DirectoryScanner::new(filter);

    let included = scanner.scan(&dir.path().join("lone.rs")).unwrap();
    assert_eq!(included.len(), 1);

    let excluded = scanner.scan(&dir.path().join("lone.md")).unwrap();
    assert!(excluded.is_empty());
}

#[test]
fn gitignore_rules_are_respected() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "src/kept.rs");
    touch(&dir, "out/ignored.rs");
    fs::write(dir.path().join(".gitignore"), "out/\n").unwrap();

    let filter = GlobFilter::new(vec!["rs".to_string()], &[]).unwrap();
    let scanner = DirectoryScanner::with_gitignore(filter, true);
    let files = scanner.scan(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/kept.rs"));
}

#[test]
fn empty_directory_yields_no_files() {
    let dir = TempDir::new().unwrap();
    let filter = GlobFilter::new(vec!["rs".to_string()], &[]).unwrap();
    let scanner = DirectoryScanner::new(filter);
    assert!(scanner.scan(dir.path()).unwrap().is_empty());
}
