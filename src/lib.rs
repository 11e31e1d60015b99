//! ray-images: lookups over the supported CI container image matrices in
//! `ray-images.yaml`.
//!
//! The free functions share one process-wide [`ImagesLoader`] that discovers
//! the repository root from the running program's location (falling back to
//! the working directory) and reads the document once. Construct an
//! [`ImagesLoader`] directly for an explicit root or an isolated cache.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use once_cell::sync::Lazy;

pub use app::{ImagesLoader, RootSource, locate_root};
pub use domain::{
    AppError, IMAGES_FILE, ImageConfig, ImageMatrix, ImageMatrixEntry, MatrixFilter, ROOT_MARKER,
    SupportedImages,
};
pub use ports::RepositoryFilesystem;
pub use services::LocalFilesystem;

static SUPPORTED_IMAGES: Lazy<ImagesLoader> = Lazy::new(ImagesLoader::new);

// =============================================================================
// Process-wide Accessors
// =============================================================================

/// Parsed document, loaded on first call and reused for the process lifetime.
pub fn load_supported_images() -> Result<&'static SupportedImages, AppError> {
    SUPPORTED_IMAGES.ensure_loaded()
}

/// Full record for an image type.
pub fn get_image_config(image_type: &str) -> Result<&'static ImageConfig, AppError> {
    SUPPORTED_IMAGES.image_config(image_type)
}

/// Supported Python versions, in document order.
pub fn get_python_versions(image_type: &str) -> Result<&'static [String], AppError> {
    SUPPORTED_IMAGES.python_versions(image_type)
}

/// Supported platforms, in document order.
pub fn get_platforms(image_type: &str) -> Result<&'static [String], AppError> {
    SUPPORTED_IMAGES.platforms(image_type)
}

/// Supported architectures, in document order.
pub fn get_architectures(image_type: &str) -> Result<&'static [String], AppError> {
    SUPPORTED_IMAGES.architectures(image_type)
}

/// `defaults[key]` for an image type.
///
/// Fails with a lookup error if either the image type or the key is absent.
pub fn get_default(image_type: &str, key: &str) -> Result<&'static str, AppError> {
    SUPPORTED_IMAGES.default_value(image_type, key)
}

// =============================================================================
// Matrix Export API
// =============================================================================

/// Image type names in document order.
pub fn image_types() -> Result<Vec<&'static str>, AppError> {
    SUPPORTED_IMAGES.image_types()
}

/// Build the GitHub Actions matrix for an image type.
pub fn build_matrix(image_type: &str, filter: &MatrixFilter) -> Result<ImageMatrix, AppError> {
    SUPPORTED_IMAGES.build_matrix(image_type, filter)
}
