//! GitHub Actions step output adapters.
//!
//! Runners expose a `GITHUB_OUTPUT` file that steps append `key=value` lines to.
//! Without it (local runs, old self-hosted runners), outputs fall back to the
//! legacy `::set-output` workflow command on stdout.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::ports::OutputChannel;

const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Output channel selected from the runner environment.
#[derive(Debug)]
pub enum GithubOutput {
    File(GithubOutputFile),
    Command(WorkflowCommandOutput<io::Stdout>),
}

impl GithubOutput {
    /// Use the `GITHUB_OUTPUT` file when present, workflow commands otherwise.
    pub fn new(github_output: Option<PathBuf>) -> Self {
        match github_output {
            Some(path) => GithubOutput::File(GithubOutputFile::new(path)),
            None => GithubOutput::Command(WorkflowCommandOutput::new(io::stdout())),
        }
    }
}

impl OutputChannel for GithubOutput {
    fn set_output(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        match self {
            GithubOutput::File(file) => file.set_output(key, value),
            GithubOutput::Command(command) => command.set_output(key, value),
        }
    }

    fn set_outputs(&mut self, entries: &[(&str, &str)]) -> Result<(), AppError> {
        match self {
            GithubOutput::File(file) => file.set_outputs(entries),
            GithubOutput::Command(command) => command.set_outputs(entries),
        }
    }
}

/// Appends outputs to the file named by `GITHUB_OUTPUT`.
#[derive(Debug, Clone)]
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn append(&self, contents: &str) -> Result<(), AppError> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path).map_err(
            |e| AppError::OutputChannel(format!("Failed to open GITHUB_OUTPUT: {}", e)),
        )?;
        file.write_all(contents.as_bytes())
            .map_err(|e| AppError::OutputChannel(format!("Failed to write GITHUB_OUTPUT: {}", e)))
    }
}

impl OutputChannel for GithubOutputFile {
    fn set_output(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.append(&file_command_entry(key, value)?)
    }

    fn set_outputs(&mut self, entries: &[(&str, &str)]) -> Result<(), AppError> {
        // Every entry is rendered before the file is touched.
        let mut contents = String::new();
        for (key, value) in entries {
            contents.push_str(&file_command_entry(key, value)?);
        }
        self.append(&contents)
    }
}

/// Format one output entry for the `GITHUB_OUTPUT` file.
///
/// Single-line values use `key=value`; values with line breaks use the
/// heredoc form with a delimiter that does not occur in the value.
pub fn file_command_entry(key: &str, value: &str) -> Result<String, AppError> {
    if !value.contains(['\n', '\r']) {
        return Ok(format!("{key}={value}\n"));
    }

    let delimiter = heredoc_delimiter(value);
    if key.contains(&delimiter) || value.contains(&delimiter) {
        return Err(AppError::OutputChannel(format!(
            "output '{key}' collides with heredoc delimiter {delimiter}"
        )));
    }
    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn heredoc_delimiter(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("{DELIMITER_PREFIX}{hex}")
}

/// Issues `::set-output` workflow commands to a writer.
#[derive(Debug)]
pub struct WorkflowCommandOutput<W: Write> {
    writer: W,
}

impl<W: Write> WorkflowCommandOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputChannel for WorkflowCommandOutput<W> {
    fn set_output(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        writeln!(self.writer, "{}", set_output_command(key, value))
            .and_then(|_| self.writer.flush())
            .map_err(|e| AppError::OutputChannel(format!("Failed to issue set-output: {}", e)))
    }

    fn set_outputs(&mut self, entries: &[(&str, &str)]) -> Result<(), AppError> {
        let commands: String = entries
            .iter()
            .map(|(key, value)| format!("{}\n", set_output_command(key, value)))
            .collect();
        self.writer
            .write_all(commands.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| AppError::OutputChannel(format!("Failed to issue set-output: {}", e)))
    }
}

/// Render a `::set-output` workflow command.
pub fn set_output_command(key: &str, value: &str) -> String {
    format!("::set-output name={}::{}", escape_property(key), escape_data(value))
}

fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
