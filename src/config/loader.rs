use std::path::{Path, PathBuf};

use crate::error::{QualityGuardError, Result};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".quality-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// built-in defaults when no config file is found.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads `.quality-guard.toml` from the working directory or its ancestors.
///
/// The hook can be invoked from anywhere inside a project, so discovery walks
/// up the directory tree until a config file is found. No file means built-in
/// defaults, never an error.
pub struct FileConfigLoader<FS: FileSystem = RealFileSystem> {
    fs: FS,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> FileConfigLoader<FS> {
    pub const fn with_fs(fs: FS) -> Self {
        Self { fs }
    }

    fn discover(&self) -> Result<Option<PathBuf>> {
        let cwd = self.fs.current_dir()?;
        for dir in cwd.ancestors() {
            let candidate = dir.join(LOCAL_CONFIG_NAME);
            if self.fs.exists(&candidate) {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    fn parse(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| QualityGuardError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl<FS: FileSystem> ConfigLoader for FileConfigLoader<FS> {
    fn load(&self) -> Result<Config> {
        match self.discover()? {
            Some(path) => self.parse(&path),
            None => Ok(Config::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.exists(path) {
            return Err(QualityGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        self.parse(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
