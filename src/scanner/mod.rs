mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for discovering files to check.
pub trait FileScanner {
    /// Scan a root path and return all included files.
    ///
    /// # Errors
    /// Returns an error if the root cannot be walked.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
