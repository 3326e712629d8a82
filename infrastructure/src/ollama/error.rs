//! Error types for the Ollama adapter

use reasoner_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to the Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Response has no message")]
    MissingMessage,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<OllamaError> for GatewayError {
    fn from(error: OllamaError) -> Self {
        match &error {
            OllamaError::Http(e) if e.is_connect() || e.is_timeout() => {
                GatewayError::ConnectionError(error.to_string())
            }
            OllamaError::Http(e) if e.is_decode() => GatewayError::InvalidResponse(error.to_string()),
            OllamaError::Http(_) | OllamaError::Status { .. } => {
                GatewayError::RequestFailed(error.to_string())
            }
            OllamaError::MissingMessage => GatewayError::InvalidResponse(error.to_string()),
            OllamaError::InvalidBaseUrl(_) => GatewayError::Other(error.to_string()),
        }
    }
}
