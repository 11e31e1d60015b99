pub mod matrix;
pub mod model;

pub use matrix::{ImageMatrix, ImageMatrixEntry, MatrixFilter, build_matrix};
pub use model::{ImageConfig, SupportedImages};
