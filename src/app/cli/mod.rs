//! CLI Adapter.

mod matrix;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::ImagesLoader;
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "ray-images")]
#[command(version)]
#[command(about = "Query the supported CI image matrices in ray-images.yaml", long_about = None)]
struct Cli {
    /// Repository root holding ray-images.yaml (skips .rayciversion discovery)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Log discovery and loading details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List image types in document order
    #[clap(visible_alias = "ls")]
    Types,
    /// Print the full record for an image type as JSON
    Show {
        /// Image type (e.g. ray, ray-ml)
        image_type: String,
    },
    /// List supported Python versions
    Python {
        /// Image type
        image_type: String,
    },
    /// List supported platforms
    Platforms {
        /// Image type
        image_type: String,
    },
    /// List supported architectures
    #[clap(visible_alias = "archs")]
    Architectures {
        /// Image type
        image_type: String,
    },
    /// Print a default value for an image type
    Default {
        /// Image type
        image_type: String,
        /// Default option name (e.g. python)
        key: String,
    },
    /// Export a GitHub Actions build matrix as JSON
    #[clap(visible_alias = "mx")]
    Matrix(matrix::MatrixArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let loader = match cli.root {
        Some(root) => ImagesLoader::with_root(root),
        None => ImagesLoader::new(),
    };

    if let Err(e) = execute(&loader, cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(loader: &ImagesLoader, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Types => print_lines(loader.image_types()?),
        Commands::Show { image_type } => {
            let config = loader.image_config(&image_type)?;
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        Commands::Python { image_type } => print_lines(loader.python_versions(&image_type)?),
        Commands::Platforms { image_type } => print_lines(loader.platforms(&image_type)?),
        Commands::Architectures { image_type } => {
            print_lines(loader.architectures(&image_type)?)
        }
        Commands::Default { image_type, key } => {
            println!("{}", loader.default_value(&image_type, &key)?);
        }
        Commands::Matrix(args) => matrix::run_matrix(loader, args)?,
    }
    Ok(())
}

fn print_lines<S: AsRef<str>>(values: impl IntoIterator<Item = S>) {
    for value in values {
        println!("{}", value.as_ref());
    }
}
