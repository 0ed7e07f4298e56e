use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

/// Pack a directory of Tiled .tmx maps into one consolidated JSON level file.
#[derive(Parser, Debug)]
#[command(name = "levelpacker")]
#[command(about = "Packs a directory of .tmx tile maps into a single JSON document", long_about = None)]
struct Cli {
    /// Directory scanned (non-recursively) for .tmx map files
    input_dir: PathBuf,

    /// Destination path for the aggregated JSON document
    output_file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        input = %cli.input_dir.display(),
        output = %cli.output_file.display(),
        "packing levels"
    );

    match levelpacker::convert_directory(&cli.input_dir, &cli.output_file) {
        Ok(()) => {
            info!(output = %cli.output_file.display(), "level pack written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
