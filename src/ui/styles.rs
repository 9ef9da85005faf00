//! Application stylesheet.

use {
    libadwaita::gtk::{
        CssProvider, STYLE_PROVIDER_PRIORITY_APPLICATION, gdk::Display,
        style_context_add_provider_for_display,
    },
    tracing::debug,
};

use crate::error::UiError;

/// CSS for the photo tiles, placeholders and loading overlay.
pub const APP_CSS: &str = "
.photo-tile {
    padding: 0;
    border-radius: 10px;
}

.photo-placeholder {
    background-color: @accent_bg_color;
    border-radius: 10px;
}

.loading-overlay {
    background-color: alpha(@window_bg_color, 0.8);
}
";

/// Installs `APP_CSS` on the default display.
///
/// # Errors
///
/// Returns `UiError::InitializationError` if there is no default display.
pub fn load_app_css() -> Result<(), UiError> {
    let display = Display::default()
        .ok_or_else(|| UiError::InitializationError("No default display".to_string()))?;

    let provider = CssProvider::new();
    provider.load_from_string(APP_CSS);
    style_context_add_provider_for_display(
        &display,
        &provider,
        STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    debug!("Application stylesheet loaded");
    Ok(())
}
