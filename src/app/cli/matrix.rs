use clap::Args;

use crate::app::ImagesLoader;
use crate::domain::{AppError, MatrixFilter};

#[derive(Args)]
pub struct MatrixArgs {
    /// Image type
    image_type: String,
    /// Restrict to these Python versions (repeatable)
    #[arg(long = "python", value_name = "VERSION")]
    python: Vec<String>,
    /// Restrict to these platforms (repeatable)
    #[arg(long = "platform", value_name = "PLATFORM")]
    platforms: Vec<String>,
    /// Restrict to these architectures (repeatable)
    #[arg(long = "architecture", visible_alias = "arch", value_name = "ARCH")]
    architectures: Vec<String>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

pub fn run_matrix(loader: &ImagesLoader, args: MatrixArgs) -> Result<(), AppError> {
    let filter = MatrixFilter {
        python: args.python,
        platforms: args.platforms,
        architectures: args.architectures,
    };
    let matrix = loader.build_matrix(&args.image_type, &filter)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&matrix)?
    } else {
        serde_json::to_string(&matrix)?
    };
    println!("{}", json);
    Ok(())
}
