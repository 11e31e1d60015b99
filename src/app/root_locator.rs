//! Repository root discovery via the `.rayciversion` marker.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, paths};
use crate::ports::RepositoryFilesystem;

/// Find the directory holding the root marker.
///
/// Probes `start` and each of its ancestors, nearest first, then the working
/// directory. The working-directory probe runs even when it was already among
/// the ancestors.
pub fn locate_root(
    fs: &impl RepositoryFilesystem,
    start: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let mut searched = Vec::new();

    if let Some(start) = start {
        for dir in start.ancestors().filter(|dir| !dir.as_os_str().is_empty()) {
            debug!(dir = %dir.display(), "probing for root marker");
            if fs.file_exists(&paths::root_marker(dir)) {
                debug!(root = %dir.display(), "found repository root");
                return Ok(dir.to_path_buf());
            }
            searched.push(dir.to_path_buf());
        }
    }

    let cwd = fs.current_dir()?;
    debug!(dir = %cwd.display(), "probing working directory for root marker");
    if fs.file_exists(&paths::root_marker(&cwd)) {
        debug!(root = %cwd.display(), "found repository root in working directory");
        return Ok(cwd);
    }
    searched.push(cwd);

    Err(AppError::RootNotFound { searched })
}
