//! Interactive mode for the popular-movies widget.
//!
//! Builds the catalog gateway from configuration, hands it to the TUI
//! through the session context, and runs the bubbletea-rs program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use popcorn::telemetry::TracingTelemetrySink;
use popcorn::tui::{PopularMoviesApp, SessionContext, set_session_context};
use popcorn::{CatalogError, PopcornConfig, TmdbGateway};

/// Runs the widget until the user quits.
///
/// # Errors
///
/// Returns an error if:
/// - No API key is configured
/// - A configured value is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &PopcornConfig) -> Result<(), CatalogError> {
    let gateway = TmdbGateway::new(config.catalog_settings()?)?;
    let settings = config.widget_settings()?;

    tracing::info!(
        language = %gateway.settings().language,
        sample_size = settings.sample_size,
        control = %settings.control,
        "starting popular movies widget"
    );

    // If a context was already set in this process the existing one is kept.
    let context = SessionContext::new(Arc::new(gateway), settings)
        .with_telemetry(Arc::new(TracingTelemetrySink));
    let _ = set_session_context(context);

    run_tui().await.map_err(|error| CatalogError::Interface {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `PopularMoviesApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // PopularMoviesApp::init() reads the gateway from module-level storage.
    let program = Program::<PopularMoviesApp>::builder()
        .alt_screen(true)
        .build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
