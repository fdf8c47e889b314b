//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::adapters::{FilesystemPackageDirectory, GithubOutput};
use crate::app::RunnerEnvironment;
use crate::app::commands::describe;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "lake-describe")]
#[command(version)]
#[command(
    about = "Publish a Lake package's name and default targets as GitHub Actions outputs",
    long_about = None
)]
struct Cli {
    /// Package directory containing lakefile.toml (default: current directory)
    #[arg(short = 'C', long = "package-dir")]
    package_dir: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let env = RunnerEnvironment::from_env();
    if let Err(e) = run_describe(&env, cli.package_dir) {
        eprintln!("Error parsing Lake package description: {}", e);
        std::process::exit(1);
    }
}

fn run_describe(env: &RunnerEnvironment, package_dir: Option<PathBuf>) -> Result<(), AppError> {
    let root = env.resolve_package_directory(package_dir);
    tracing::debug!(package_dir = %root.display(), "describing Lake package");

    let package = FilesystemPackageDirectory::new(root);
    let mut channel = GithubOutput::new(env.github_output.clone());
    let mut stdout = std::io::stdout();

    describe::execute(&package, &mut channel, &mut stdout).map(|_| ())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
