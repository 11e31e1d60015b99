//! Load-once access to `ray-images.yaml`.

use std::path::PathBuf;

use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

use super::root_locator::locate_root;
use crate::domain::{
    AppError, ImageConfig, ImageMatrix, MatrixFilter, SupportedImages, build_matrix, paths,
};
use crate::ports::RepositoryFilesystem;
use crate::services::LocalFilesystem;

/// Where the loader takes the repository root from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSource {
    /// Search upward from the running program, then the working directory.
    Discover,
    /// Search upward from the given path, then the working directory.
    SearchFrom(PathBuf),
    /// Use this directory as the root without probing for the marker.
    Fixed(PathBuf),
}

/// Owns the parsed images document once it has been read.
///
/// The first successful load is cached for the lifetime of the loader and the
/// file is never read again. A failed load caches nothing, so a later call
/// tries again.
#[derive(Debug)]
pub struct ImagesLoader<F: RepositoryFilesystem = LocalFilesystem> {
    fs: F,
    root: RootSource,
    images: OnceCell<SupportedImages>,
}

impl ImagesLoader<LocalFilesystem> {
    /// Loader that discovers the root from the running program's location.
    pub fn new() -> Self {
        Self::with_filesystem(LocalFilesystem, RootSource::Discover)
    }

    /// Loader bound to a known repository root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::with_filesystem(LocalFilesystem, RootSource::Fixed(root.into()))
    }
}

impl Default for ImagesLoader<LocalFilesystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: RepositoryFilesystem> ImagesLoader<F> {
    pub fn with_filesystem(fs: F, root: RootSource) -> Self {
        Self { fs, root, images: OnceCell::new() }
    }

    pub fn is_loaded(&self) -> bool {
        self.images.get().is_some()
    }

    /// Return the cached document, loading it on first use.
    ///
    /// Concurrent first callers block until one of them finishes loading.
    pub fn ensure_loaded(&self) -> Result<&SupportedImages, AppError> {
        if let Some(images) = self.images.get() {
            debug!("supported images already loaded");
            return Ok(images);
        }
        self.images.get_or_try_init(|| self.load())
    }

    pub fn image_types(&self) -> Result<Vec<&str>, AppError> {
        Ok(self.ensure_loaded()?.image_types().collect())
    }

    pub fn image_config(&self, image_type: &str) -> Result<&ImageConfig, AppError> {
        self.ensure_loaded()?.image_config(image_type)
    }

    pub fn python_versions(&self, image_type: &str) -> Result<&[String], AppError> {
        self.ensure_loaded()?.python_versions(image_type)
    }

    pub fn platforms(&self, image_type: &str) -> Result<&[String], AppError> {
        self.ensure_loaded()?.platforms(image_type)
    }

    pub fn architectures(&self, image_type: &str) -> Result<&[String], AppError> {
        self.ensure_loaded()?.architectures(image_type)
    }

    pub fn default_value(&self, image_type: &str, key: &str) -> Result<&str, AppError> {
        self.ensure_loaded()?.default_value(image_type, key)
    }

    pub fn build_matrix(
        &self,
        image_type: &str,
        filter: &MatrixFilter,
    ) -> Result<ImageMatrix, AppError> {
        build_matrix(self.ensure_loaded()?, image_type, filter)
    }

    fn load(&self) -> Result<SupportedImages, AppError> {
        let root = self.resolve_root()?;
        let path = paths::images_file(&root);

        let content = self
            .fs
            .read_file(&path)
            .map_err(|source| AppError::ImagesFileRead { path: path.clone(), source })?;
        let images = SupportedImages::parse_yaml(&content)
            .map_err(|source| AppError::ImagesFileParse { path: path.clone(), source })?;

        if images.is_empty() {
            warn!(path = %path.display(), "images file declares no image types");
        }
        info!(path = %path.display(), image_types = images.len(), "loaded supported images");
        Ok(images)
    }

    fn resolve_root(&self) -> Result<PathBuf, AppError> {
        match &self.root {
            RootSource::Fixed(root) => Ok(root.clone()),
            RootSource::SearchFrom(start) => locate_root(&self.fs, Some(start.as_path())),
            RootSource::Discover => {
                let start = match self.fs.program_location() {
                    Ok(location) => Some(location),
                    Err(err) => {
                        warn!(
                            error = %err,
                            "cannot resolve program location; checking working directory only"
                        );
                        None
                    }
                };
                locate_root(&self.fs, start.as_deref())
            }
        }
    }
}
