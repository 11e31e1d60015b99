use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for supported image lookups.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of reading the images file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No searched directory contained the root marker.
    #[error(
        "Could not find repository root (missing .rayciversion). Searched: {}",
        display_paths(.searched)
    )]
    RootNotFound { searched: Vec<PathBuf> },

    /// The images file is missing or unreadable.
    #[error("Failed to read {}: {source}", .path.display())]
    ImagesFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The images file is not valid YAML or not a mapping of image types.
    #[error("Failed to parse {}: {source}", .path.display())]
    ImagesFileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Image type absent from the document.
    #[error("Image type '{image_type}' not found. Available: {available}")]
    ImageTypeNotFound { image_type: String, available: String },

    /// Image record lacks one of its list or defaults fields.
    #[error("Image type '{image_type}' has no '{field}' entry")]
    FieldNotFound { image_type: String, field: &'static str },

    /// Default key absent from an image record.
    #[error("Image type '{image_type}' has no default for '{key}'")]
    DefaultNotFound { image_type: String, key: String },

    /// Image record present but not shaped like an image configuration.
    #[error("Image type '{image_type}' is malformed: {reason}")]
    MalformedImageConfig { image_type: String, reason: String },

    /// Caller-supplied value rejected.
    #[error("{0}")]
    Validation(String),

    /// JSON rendering failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error is a lookup miss in an otherwise loaded document.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            AppError::ImageTypeNotFound { .. }
                | AppError::FieldNotFound { .. }
                | AppError::DefaultNotFound { .. }
        )
    }

    /// Provide an `io::ErrorKind`-like view for callers that bucket failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ImagesFileRead { source, .. } => source.kind(),
            AppError::RootNotFound { .. }
            | AppError::ImageTypeNotFound { .. }
            | AppError::FieldNotFound { .. }
            | AppError::DefaultNotFound { .. } => io::ErrorKind::NotFound,
            AppError::ImagesFileParse { .. }
            | AppError::MalformedImageConfig { .. }
            | AppError::Validation(_) => io::ErrorKind::InvalidData,
            AppError::Json(_) => io::ErrorKind::Other,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(nothing)".to_string();
    }
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_are_distinguishable_from_io_failures() {
        let missing_type =
            AppError::ImageTypeNotFound { image_type: "gpu".into(), available: "cpu".into() };
        let missing_default = AppError::DefaultNotFound { image_type: "cpu".into(), key: "x".into() };
        let missing_field = AppError::FieldNotFound { image_type: "cpu".into(), field: "python" };
        assert!(missing_type.is_lookup_failure());
        assert!(missing_default.is_lookup_failure());
        assert!(missing_field.is_lookup_failure());

        let root = AppError::RootNotFound { searched: vec![PathBuf::from("/tmp")] };
        let read = AppError::ImagesFileRead {
            path: PathBuf::from("/repo/ray-images.yaml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!root.is_lookup_failure());
        assert!(!read.is_lookup_failure());
        assert_eq!(read.kind(), io::ErrorKind::PermissionDenied);

        let malformed =
            AppError::MalformedImageConfig { image_type: "cpu".into(), reason: "null".into() };
        assert!(!malformed.is_lookup_failure());
        assert_eq!(malformed.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn root_not_found_lists_searched_directories() {
        let err = AppError::RootNotFound {
            searched: vec![PathBuf::from("/a/b"), PathBuf::from("/a"), PathBuf::from("/work")],
        };
        let message = err.to_string();
        assert!(message.contains(".rayciversion"));
        assert!(message.contains("/a/b, /a, /work"));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
