//! Photo Album
//!
//! This is the main entry point for the photo album application.
//! It initializes logging and Libadwaita and starts the main application loop.

use {
    anyhow::Result,
    photo_album::{error::ResultExt, ui::PhotoAlbumApplication},
    tracing_subscriber::{EnvFilter, fmt},
};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "photo_album=info";

/// Main entry point for the photo album application.
///
/// This function installs the tracing subscriber, initializes GTK and
/// Libadwaita, creates the main application instance and starts the event
/// loop.
#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    libadwaita::init().add_context("Failed to initialize Libadwaita")?;

    let app = PhotoAlbumApplication::new()?;
    app.run();

    Ok(())
}
