mod output_channel;
mod package_directory;

pub use output_channel::OutputChannel;
pub use package_directory::PackageDirectory;
