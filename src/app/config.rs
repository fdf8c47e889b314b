//! Runner environment configuration.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the step output file on GitHub-hosted runners.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Environment variable carrying the `lake_package_directory` action input.
pub const PACKAGE_DIRECTORY_ENV: &str = "INPUT_LAKE_PACKAGE_DIRECTORY";

/// Settings read from the process environment once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerEnvironment {
    /// Path of the step output file, when running under GitHub Actions.
    pub github_output: Option<PathBuf>,
    /// Package directory supplied as an action input.
    pub package_directory: Option<PathBuf>,
}

impl RunnerEnvironment {
    /// Read the runner environment from the current process.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build the runner environment from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset, matching how Actions passes
    /// unspecified inputs.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            github_output: non_empty(GITHUB_OUTPUT_ENV),
            package_directory: non_empty(PACKAGE_DIRECTORY_ENV),
        }
    }

    /// Package directory to read from: explicit flag, then action input, then
    /// the current directory.
    pub fn resolve_package_directory(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.package_directory.clone()).unwrap_or_else(|| PathBuf::from("."))
    }
}
