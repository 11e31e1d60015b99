//! In-memory `RepositoryFilesystem` double that counts reads.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::ports::RepositoryFilesystem;

/// Seeded file map plus fake working directory and program location.
///
/// Clones share state, so a test can keep a handle to inspect the read count
/// after moving the double into a loader.
#[derive(Clone, Debug)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    reads: Arc<AtomicUsize>,
    cwd: PathBuf,
    program: Option<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            reads: Arc::new(AtomicUsize::new(0)),
            cwd: cwd.into(),
            program: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Seed a file.
    pub fn add(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
    }

    /// Number of `read_file` calls so far, successful or not.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl RepositoryFilesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn program_location(&self) -> io::Result<PathBuf> {
        self.program
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Unsupported, "no program location"))
    }
}
