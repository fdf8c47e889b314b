use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::PackageDirectory;

/// Filesystem-backed package directory.
#[derive(Debug, Clone)]
pub struct FilesystemPackageDirectory {
    root: PathBuf,
}

impl FilesystemPackageDirectory {
    /// Create a package directory rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl PackageDirectory for FilesystemPackageDirectory {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        tracing::debug!(path = %full_path.display(), "reading package file");
        fs::read_to_string(&full_path)
            .map_err(|source| AppError::ConfigurationNotFound { file: path.to_string(), source })
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_file_relative_to_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lakefile.toml"), "name = \"foo\"\n").unwrap();

        let package = FilesystemPackageDirectory::new(dir.path().to_path_buf());

        assert_eq!(package.read_file("lakefile.toml").unwrap(), "name = \"foo\"\n");
    }

    #[test]
    fn missing_file_is_configuration_not_found() {
        let dir = TempDir::new().unwrap();
        let package = FilesystemPackageDirectory::new(dir.path().to_path_buf());

        let err = package.read_file("lakefile.toml").unwrap_err();

        match err {
            AppError::ConfigurationNotFound { file, source } => {
                assert_eq!(file, "lakefile.toml");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected ConfigurationNotFound, got {other:?}"),
        }
    }

    #[test]
    fn directory_in_place_of_file_is_configuration_not_found() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("lakefile.toml")).unwrap();
        let package = FilesystemPackageDirectory::new(dir.path().to_path_buf());

        let err = package.read_file("lakefile.toml").unwrap_err();

        assert!(matches!(err, AppError::ConfigurationNotFound { .. }));
    }
}
