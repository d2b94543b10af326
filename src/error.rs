//! Error types for utm

use thiserror::Error;

/// Main error type for utm
#[derive(Debug, Error)]
pub enum UtmError {
    #[error("Invalid URL{}", detail(.0))]
    InvalidUrl(Option<String>),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(msg) => format!(": {}", msg),
        None => String::new(),
    }
}

impl UtmError {
    /// Shorthand for an `InvalidUrl` carrying a message
    pub fn invalid_url(message: impl Into<String>) -> Self {
        UtmError::InvalidUrl(Some(message.into()))
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UtmError::InvalidUrl(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            UtmError::InvalidUrl(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use an absolute address with an http or https scheme\n\
                    • Include a host (e.g., https://example.com/landing)\n\
                    • When parsing, pass the full URL including the '?' query\n\n\
                    Examples:\n\
                    utm build https://example.com --source newsletter\n\
                    utm parse 'https://example.com/?utm_source=newsletter'",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using UtmError
pub type Result<T> = std::result::Result<T, UtmError>;
