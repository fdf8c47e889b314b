pub mod github_output;
pub mod memory_output_channel;
pub mod package_directory_filesystem;

pub use github_output::{GithubOutput, GithubOutputFile, WorkflowCommandOutput};
pub use memory_output_channel::MemoryOutputChannel;
pub use package_directory_filesystem::FilesystemPackageDirectory;
