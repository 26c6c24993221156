//! Shared error types for the services crate.

use thiserror::Error;

use focus_core::model::SettingsError;

/// Shown to the user whenever text generation fails, whatever the cause.
pub const UNAVAILABLE_MESSAGE: &str = "An error occurred while processing your request.";

/// Errors emitted by `TextGenerationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextGenerationError {
    #[error("text generation is not configured")]
    Disabled,
    #[error("text generation returned an empty response")]
    EmptyResponse,
    #[error("text generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl TextGenerationError {
    /// Generic text for the UI; details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        UNAVAILABLE_MESSAGE
    }
}
