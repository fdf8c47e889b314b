//! lake-describe: publish a Lake package's name and default targets as CI step outputs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::Path;

use adapters::FilesystemPackageDirectory;
use app::commands::describe as describe_command;
use ports::OutputChannel;

pub use adapters::{GithubOutput, MemoryOutputChannel};
pub use app::RunnerEnvironment;
pub use domain::{AppError, DescriptorOutputs, PackageDescriptor, docs_facet, parse_descriptor};

/// Describe the Lake package in `package_dir`.
///
/// Echoes the parsed `lakefile.toml` as one JSON line on stdout and publishes
/// `name`, `default_targets`, and `docs_facets` to `channel`.
pub fn describe<O: OutputChannel>(
    package_dir: &Path,
    channel: &mut O,
) -> Result<DescriptorOutputs, AppError> {
    let package = FilesystemPackageDirectory::new(package_dir.to_path_buf());
    describe_command::execute(&package, channel, &mut std::io::stdout())
}
