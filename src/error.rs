//! Error types for cmake-new

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse grouping of failures, one per way a run can abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The target directory is already there
    Precondition,
    /// The template could not be cloned
    Fetch,
    /// A file or directory the template should provide is absent
    MissingResource,
    /// An external command failed or could not be started
    Subprocess,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Directory {} already exists, exiting...", path.display())]
    DirectoryExists { path: PathBuf },

    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    #[error("failed to clone cmake template, {} was not created", path.display())]
    CloneMissing { path: PathBuf },

    #[error("template file not found: {}", path.display())]
    MissingTemplateFile { path: PathBuf },

    #[error("no build directory at {}", path.display())]
    MissingBuildDir { path: PathBuf },

    #[error("required command not found: {command}")]
    CommandNotFound { command: String },

    #[error("failed to run {command}")]
    Spawn { command: String, source: std::io::Error },

    #[error("CMake configuration failed ({status}), exiting...")]
    ConfigureFailed { status: ExitStatus },

    #[error("git init failed: {message}")]
    GitInitFailed { message: String },

    #[error("I/O error on {}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DirectoryExists { .. } => ErrorKind::Precondition,
            Self::CloneFailed { .. } | Self::CloneMissing { .. } => ErrorKind::Fetch,
            Self::MissingTemplateFile { .. } | Self::MissingBuildDir { .. } | Self::Io { .. } => {
                ErrorKind::MissingResource
            }
            Self::CommandNotFound { .. }
            | Self::Spawn { .. }
            | Self::ConfigureFailed { .. }
            | Self::GitInitFailed { .. } => ErrorKind::Subprocess,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    /// Maps a failure to spawn `command` onto `CommandNotFound` when the binary is absent.
    pub(crate) fn spawn(command: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::CommandNotFound { command: command.to_string() }
        } else {
            Self::Spawn { command: command.to_string(), source }
        }
    }
}

/// Reduces a command's stderr to the one line worth reporting.
///
/// Prefers the last `fatal:`/`error:` line, then the last non-empty line.
pub(crate) fn stderr_summary(stderr: &[u8], status: ExitStatus) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    lines
        .iter()
        .rev()
        .find(|l| l.starts_with("fatal:") || l.starts_with("error:"))
        .or_else(|| lines.last())
        .map_or_else(|| format!("exited with {status}"), |l| (*l).to_string())
}
