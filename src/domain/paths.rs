use std::path::{Path, PathBuf};

/// Sentinel file marking the repository root. Only its existence matters.
pub const ROOT_MARKER: &str = ".rayciversion";

/// Supported image matrix document, relative to the repository root.
pub const IMAGES_FILE: &str = "ray-images.yaml";

/// `<dir>/.rayciversion`
pub fn root_marker(dir: &Path) -> PathBuf {
    dir.join(ROOT_MARKER)
}

/// `<root>/ray-images.yaml`
pub fn images_file(root: &Path) -> PathBuf {
    root.join(IMAGES_FILE)
}
