//! Error types for the weather application

use thiserror::Error;

/// Every failure a search can end in.
///
/// Cloneable so it can travel back to the UI inside a `Message`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Empty or placeholder query, rejected before any request is made
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Network failure, timeout, bad status or undecodable body
    #[error("Fetch failed: {message}")]
    Fetch { message: String },

    /// A section of the provider document is missing or malformed
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Built-in configuration is unusable
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AppError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Dialog title for this error
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "Input Error",
            AppError::Config { .. } => "Configuration Error",
            AppError::Fetch { .. } | AppError::Parse { .. } => "Error",
        }
    }

    /// Text shown to the user in the dialog body
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput { message } => message.clone(),
            AppError::Fetch { message } => {
                format!("Unable to fetch weather data.\n{message}")
            }
            AppError::Parse { message } => {
                format!("Unable to parse weather data: {message}")
            }
            AppError::Config { message } => message.clone(),
        }
    }

    /// Warnings are shown with a softer dialog than errors
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::InvalidInput { .. })
    }
}
