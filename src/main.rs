//! Popcorn CLI entrypoint for the popular-movies widget.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use popcorn::{CatalogError, PopcornConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let config = load_config()?;
    config.validate()?;
    popcorn::telemetry::init_logging(config.log_file_path())?;

    cli::widget::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PopcornConfig, CatalogError> {
    PopcornConfig::load().map_err(|error| CatalogError::Configuration {
        message: error.to_string(),
    })
}
