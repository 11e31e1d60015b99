pub mod error;
pub mod images;
pub mod paths;

pub use error::AppError;
pub use images::{
    ImageConfig, ImageMatrix, ImageMatrixEntry, MatrixFilter, SupportedImages, build_matrix,
};
pub use paths::{IMAGES_FILE, ROOT_MARKER};
