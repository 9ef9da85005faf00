//! Operational error context propagation with `anyhow`.
//!
//! This module provides extension traits for adding context to errors and
//! the centralized reporter used where an error ends its propagation.

use std::{error::Error as StdError, fmt::Display};

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::{error, warn},
};

use crate::error::domain::{LibraryError, LookupError};

/// Extension trait for enhanced error context.
///
/// This trait provides methods to add contextual information to errors,
/// making debugging and user feedback more informative.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a static string.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Adds context to an error with a formatted string.
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }

    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(format.to_string())
    }
}

/// Centralized error reporting.
///
/// Errors reaching the UI layer end here: they are logged with the screen or
/// operation they interrupted and, where needed, turned into user messages.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Reports an album lookup failure that aborted a render pass.
    pub fn lookup_failure(error: &LookupError, screen: &str) {
        error!(screen = screen, error = %error, "Album lookup failed");
    }

    /// Reports a failed album refresh; the previous albums stay in place.
    pub fn refresh_failure(error: &LibraryError) {
        warn!(error = %error, "Album refresh failed");
    }

    /// Reports an operational error at error level.
    pub fn error(error: &Error, context: &str) {
        error!(context = context, error = %error, "Operation failed");
    }

    /// Converts an error to a user-facing message.
    ///
    /// The full context chain is joined so the cause stays visible.
    pub fn to_user_message(error: &Error) -> String {
        error
            .chain()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(": ")
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind::NotFound};

    use anyhow::anyhow;

    use crate::error::operational::{ErrorReporter, ResultExt};

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<i32, IoError> = Err(IoError::new(NotFound, "Test error"));
        let error = result.add_context("Additional context").unwrap_err();

        assert_eq!(error.to_string(), "Additional context");
    }

    #[test]
    fn test_result_ext_with_contextf() {
        let result: Result<i32, IoError> = Err(IoError::new(NotFound, "Test error"));
        let error = result
            .add_contextf(format!("Failed to open {}", "albums.json"))
            .unwrap_err();

        assert_eq!(error.to_string(), "Failed to open albums.json");
    }

    #[test]
    fn test_error_reporter_user_message_includes_chain() {
        let result: Result<(), IoError> = Err(IoError::new(NotFound, "no such file"));
        let error = result.add_context("Failed to load settings").unwrap_err();

        assert_eq!(
            ErrorReporter::to_user_message(&error),
            "Failed to load settings: no such file"
        );
    }

    #[test]
    fn test_error_reporter_user_message_single() {
        let error = anyhow!("Test error message");
        assert_eq!(ErrorReporter::to_user_message(&error), "Test error message");
    }
}
