use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::*;

/// In-memory filesystem for loader tests.
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    cwd: PathBuf,
}

impl MockFileSystem {
    fn new(cwd: &str) -> Self {
        Self {
            files: HashMap::new(),
            cwd: PathBuf::from(cwd),
        }
    }

    fn add_file(&mut self, path: &str, content: &str) {
        self.files.insert(PathBuf::from(path), content.to_string());
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found")
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }
}

#[test]
fn no_config_file_loads_defaults() {
    let fs = MockFileSystem::new("/project");
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn loads_config_from_working_directory() {
    let mut fs = MockFileSystem::new("/project");
    fs.add_file(
        "/project/.quality-guard.toml",
        "[thresholds]\nmax_file_lines = 200\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().unwrap();
    assert_eq!(config.thresholds.max_file_lines, 200);
}

#[test]
fn discovery_walks_up_ancestors() {
    let mut fs = MockFileSystem::new("/project/src/deep/module");
    fs.add_file(
        "/project/.quality-guard.toml",
        "[thresholds]\nmax_nesting_depth = 6\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().unwrap();
    assert_eq!(config.thresholds.max_nesting_depth, 6);
}

#[test]
fn nearest_config_wins() {
    let mut fs = MockFileSystem::new("/project/src");
    fs.add_file(
        "/project/src/.quality-guard.toml",
        "[thresholds]\nmax_file_lines = 100\n",
    );
    fs.add_file(
        "/project/.quality-guard.toml",
        "[thresholds]\nmax_file_lines = 900\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().unwrap();
    assert_eq!(config.thresholds.max_file_lines, 100);
}

#[test]
fn load_from_missing_path_is_an_error() {
    let fs = MockFileSystem::new("/project");
    let loader = FileConfigLoader::with_fs(fs);
    assert!(loader.load_from_path(Path::new("/nope.toml")).is_err());
}

#[test]
fn invalid_toml_is_an_error() {
    let mut fs = MockFileSystem::new("/project");
    fs.add_file("/project/.quality-guard.toml", "not = [valid");
    let loader = FileConfigLoader::with_fs(fs);
    assert!(loader.load().is_err());
}

#[test]
fn semantic_validation_runs_on_load() {
    let mut fs = MockFileSystem::new("/project");
    fs.add_file(
        "/project/.quality-guard.toml",
        "[thresholds]\nmax_function_lines = 0\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    assert!(loader.load().is_err());
}
