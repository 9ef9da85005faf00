//! Domain-specific error types using `thiserror`.
//!
//! This module defines the main error enums for the different domains of the
//! application: album library loading, album lookup, localization and UI.

use std::{io::Error as IoError, result::Result as StdResult};

use {anyhow::Error, serde_json::Error as SerdeJsonError, thiserror::Error};

/// Library-related errors.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Failed to read the album catalogue.
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    /// Failed to parse the album catalogue.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Catalogue content is structurally valid but unusable.
    #[error("Invalid data: {reason}")]
    InvalidData { reason: String },
    /// The background fetch task failed to complete.
    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

/// Album lookup errors.
///
/// Raised when a screen is asked to display an album that does not exist in
/// the current state. This is a routing defect, never recovered locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No album with the requested name.
    #[error("Album not found: no album named '{name}'")]
    AlbumNotFound { name: String },
}

/// Localization errors.
#[derive(Error, Debug)]
pub enum I18nError {
    /// A translation file name is not a valid language identifier.
    #[error("Invalid locale '{0}'")]
    InvalidLocale(String),
    /// A translation file could not be parsed or added to its bundle.
    #[error("Invalid translation resource '{file}': {reason}")]
    InvalidResource { file: String, reason: String },
}

/// UI-related errors.
#[derive(Error, Debug)]
pub enum UiError {
    /// GTK/Libadwaita initialization error.
    #[error("UI initialization error: {0}")]
    InitializationError(String),
    /// The screen was built for an album that does not exist.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// Operational error context propagation with `anyhow`.
///
/// This type is used for operational errors that need rich context
/// but don't require specific handling logic.
pub type Result<T> = StdResult<T, Error>;

#[cfg(test)]
mod tests {
    use crate::error::domain::{LibraryError, LookupError, UiError};

    #[test]
    fn test_library_error_display() {
        let invalid_data_error = LibraryError::InvalidData {
            reason: "test reason".to_string(),
        };
        assert_eq!(invalid_data_error.to_string(), "Invalid data: test reason");

        let task_error = LibraryError::TaskFailed("cancelled".to_string());
        assert_eq!(task_error.to_string(), "Fetch task failed: cancelled");
    }

    #[test]
    fn test_lookup_error_display() {
        let error = LookupError::AlbumNotFound {
            name: "Trip".to_string(),
        };
        assert_eq!(error.to_string(), "Album not found: no album named 'Trip'");
    }

    #[test]
    fn test_ui_error_wraps_lookup_error() {
        let error = UiError::from(LookupError::AlbumNotFound {
            name: "Missing".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Lookup error: Album not found: no album named 'Missing'"
        );

        let init_error = UiError::InitializationError("Failed to init GTK".to_string());
        assert_eq!(
            init_error.to_string(),
            "UI initialization error: Failed to init GTK"
        );
    }
}
