use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::templates;

/// Replaces every `token` in `file` with `replacement`, overwriting the file in place.
///
/// Returns how many occurrences were replaced.
pub fn replace_placeholder(file: &Path, token: &str, replacement: &str) -> Result<usize> {
    if !file.is_file() {
        return Err(Error::MissingTemplateFile { path: file.to_path_buf() });
    }

    let content = fs::read_to_string(file).map_err(|e| Error::io(file, e))?;
    let count = content.matches(token).count();
    fs::write(file, content.replace(token, replacement)).map_err(|e| Error::io(file, e))?;

    debug!("Replaced {count} occurrence(s) of {token} in {}", file.display());
    if count == 0 {
        warn!("{} does not contain {token}", file.display());
    }

    Ok(count)
}

/// Substitutes `snake_name` into each known template file under `project_dir`.
pub fn rewrite_template_files(project_dir: &Path, snake_name: &str) -> Result<()> {
    for rel in templates::TEMPLATE_FILES {
        replace_placeholder(&project_dir.join(rel), templates::PLACEHOLDER, snake_name)?;
    }

    check_launch_json(&project_dir.join(templates::LAUNCH_JSON));
    Ok(())
}

fn check_launch_json(path: &Path) {
    let Ok(content) = fs::read_to_string(path) else { return };

    if let Err(e) = serde_json::from_str::<serde_json::Value>(&content) {
        warn!("{} is no longer valid JSON after renaming: {e}", path.display());
    }
}

/// Deletes the template's `.git` directory so the project starts without history.
///
/// Returns whether a directory was removed.
pub fn remove_vcs_metadata(project_dir: &Path) -> Result<bool> {
    let git_dir = project_dir.join(templates::VCS_DIR);
    if !git_dir.is_dir() {
        return Ok(false);
    }

    fs::remove_dir_all(&git_dir).map_err(|e| Error::io(&git_dir, e))?;
    debug!("Removed {}", git_dir.display());
    Ok(true)
}

/// Files above this size are not scanned for leftover placeholders.
pub const RESIDUE_SCAN_LIMIT: u64 = 1024 * 1024;

/// Lists files under `project_dir` that still contain `token`.
///
/// `.git` and `build` are skipped, and so is anything larger than
/// [`RESIDUE_SCAN_LIMIT`] or that is not UTF-8 text.
pub fn placeholder_residue(project_dir: &Path, token: &str) -> Vec<PathBuf> {
    WalkDir::new(project_dir)
        .into_iter()
        .filter_entry(|e| {
            e.depth() != 1
                || (e.file_name() != templates::VCS_DIR && e.file_name() != templates::BUILD_DIR)
        })
        .filter_map(|entry| {
            entry.map_err(|e| debug!("Skipping unreadable entry during residue scan: {e}")).ok()
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| text_contains(e, token))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn text_contains(entry: &walkdir::DirEntry, token: &str) -> bool {
    let path = entry.path();

    match entry.metadata() {
        Ok(meta) if meta.len() > RESIDUE_SCAN_LIMIT => {
            debug!("Skipping {} ({} bytes)", path.display(), meta.len());
            return false;
        }
        Ok(_) => {}
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            return false;
        }
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            return false;
        }
    };

    if bytes.contains(&0) {
        debug!("Skipping binary file {}", path.display());
        return false;
    }

    std::str::from_utf8(&bytes).is_ok_and(|text| text.contains(token))
}
