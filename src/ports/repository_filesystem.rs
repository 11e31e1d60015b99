//! Filesystem probes needed to locate the repository root and read the
//! images document.

use std::io;
use std::path::{Path, PathBuf};

/// Port for the read-only filesystem operations the loader performs.
///
/// All paths are absolute (or relative to the process working directory).
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// The process working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Resolved location of the running program, where the root search starts.
    fn program_location(&self) -> io::Result<PathBuf>;
}
