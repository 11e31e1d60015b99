use serde::Serialize;

use super::model::SupportedImages;
use crate::domain::AppError;

/// Optional narrowing of a build matrix. Empty lists select everything.
#[derive(Debug, Clone, Default)]
pub struct MatrixFilter {
    pub python: Vec<String>,
    pub platforms: Vec<String>,
    pub architectures: Vec<String>,
}

/// GitHub Actions `strategy.matrix` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageMatrix {
    pub include: Vec<ImageMatrixEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageMatrixEntry {
    pub python: String,
    pub platform: String,
    pub architecture: String,
}

/// Expand python × platforms × architectures for one image type.
///
/// Entries follow document order, python outermost. Filter values the image
/// type does not declare are rejected rather than silently dropped.
pub fn build_matrix(
    images: &SupportedImages,
    image_type: &str,
    filter: &MatrixFilter,
) -> Result<ImageMatrix, AppError> {
    let python =
        select(image_type, "Python version", images.python_versions(image_type)?, &filter.python)?;
    let platforms =
        select(image_type, "Platform", images.platforms(image_type)?, &filter.platforms)?;
    let architectures = select(
        image_type,
        "Architecture",
        images.architectures(image_type)?,
        &filter.architectures,
    )?;

    let mut include = Vec::with_capacity(python.len() * platforms.len() * architectures.len());
    for version in &python {
        for platform in &platforms {
            for architecture in &architectures {
                include.push(ImageMatrixEntry {
                    python: version.to_string(),
                    platform: platform.to_string(),
                    architecture: architecture.to_string(),
                });
            }
        }
    }

    Ok(ImageMatrix { include })
}

fn select<'a>(
    image_type: &str,
    what: &str,
    supported: &'a [String],
    requested: &[String],
) -> Result<Vec<&'a str>, AppError> {
    if let Some(unknown) = requested.iter().find(|r| !supported.contains(*r)) {
        return Err(AppError::Validation(format!(
            "{} '{}' is not supported by image type '{}'. Supported: {}",
            what,
            unknown,
            image_type,
            supported.join(", ")
        )));
    }

    Ok(supported
        .iter()
        .filter(|value| requested.is_empty() || requested.contains(*value))
        .map(String::as_str)
        .collect())
}
