//! Read access to a Lake package directory.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for reading files from a package directory.
///
/// All `path` arguments are relative to the package directory.
pub trait PackageDirectory {
    /// Read a file as UTF-8 text.
    ///
    /// Missing or unreadable files surface as `AppError::ConfigurationNotFound`.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Resolve a relative path against the package directory.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
