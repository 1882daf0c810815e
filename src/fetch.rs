use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result, stderr_summary};

/// Clones `url` into `dest`, which must not be an existing directory.
///
/// # Errors
/// - `DirectoryExists` if `dest` is already a directory; nothing is cloned
/// - `CloneFailed` if git exits non-zero, carrying the last line git complained with
/// - `CloneMissing` if git reports success but `dest` is not a directory afterwards
pub fn clone_template(git: &str, url: &str, dest: &Path) -> Result<()> {
    if dest.is_dir() {
        return Err(Error::DirectoryExists { path: dest.to_path_buf() });
    }

    debug!("Running: {git} clone {url} {}", dest.display());
    let output = Command::new(git)
        .arg("clone")
        .arg(url)
        .arg(dest)
        .output()
        .map_err(|e| Error::spawn(git, e))?;

    if !output.status.success() {
        let message = stderr_summary(&output.stderr, output.status);
        return Err(Error::CloneFailed { url: url.to_string(), message });
    }

    if !dest.is_dir() {
        return Err(Error::CloneMissing { path: dest.to_path_buf() });
    }

    Ok(())
}
