use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::RepositoryFilesystem;

/// `RepositoryFilesystem` backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl RepositoryFilesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn program_location(&self) -> io::Result<PathBuf> {
        std::env::current_exe()?.canonicalize()
    }
}
