//! Error types for textspitter.
//!
//! All fallible operations in the library return [`Result`]. The error policy
//! follows two rules:
//!
//! - **System errors bubble up unchanged**: `TextSpitterError::Io` (from
//!   `std::io::Error`) indicates a real file-system problem the caller needs
//!   to know about. It is never wrapped or suppressed.
//! - **Format-parsing errors are absorbed**: PDF and DOCX parse failures are
//!   logged at error level inside the reader operations and surface to the
//!   caller only as an empty extraction result. `Parsing` exists for the
//!   extraction backends to communicate with the readers, not for the
//!   public API.
//!
//! `Configuration` errors are caller errors (no usable input, or a byte
//! source without a filename) and are always returned to the caller.
use thiserror::Error;

/// Result type alias using `TextSpitterError`.
pub type Result<T> = std::result::Result<T, TextSpitterError>;

/// Main error type for all textspitter operations.
#[derive(Debug, Error)]
pub enum TextSpitterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TextSpitterError {
    /// Create a Configuration error.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a Parsing error.
    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Parsing error with source.
    pub fn parsing_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Parsing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
