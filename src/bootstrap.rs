use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result, stderr_summary};
use crate::templates;

/// Runs the CMake configure step inside `project_dir/build`.
///
/// The build directory comes from the template and is never created here.
/// Returns the build directory on success.
pub fn configure(project_dir: &Path, config: &Config) -> Result<PathBuf> {
    let build_dir = project_dir.join(templates::BUILD_DIR);
    if !build_dir.is_dir() {
        return Err(Error::MissingBuildDir { path: build_dir });
    }

    let args = config.cmake_args();
    debug!("Running: {} {} (in {})", config.cmake, args.join(" "), build_dir.display());

    let status = Command::new(&config.cmake)
        .args(&args)
        .current_dir(&build_dir)
        .status()
        .map_err(|e| Error::spawn(&config.cmake, e))?;

    if !status.success() {
        return Err(Error::ConfigureFailed { status });
    }

    Ok(build_dir)
}

/// Initializes an empty git repository at `project_dir`.
pub fn init_repository(git: &str, project_dir: &Path) -> Result<()> {
    debug!("Running: {git} init (in {})", project_dir.display());

    let output = Command::new(git)
        .arg("init")
        .current_dir(project_dir)
        .output()
        .map_err(|e| Error::spawn(git, e))?;

    if !output.status.success() {
        let message = stderr_summary(&output.stderr, output.status);
        return Err(Error::GitInitFailed { message });
    }

    Ok(())
}
