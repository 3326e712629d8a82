//! Infrastructure layer for reasoner
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileLoggingConfig, FileOllamaConfig, FileOutputConfig,
    FileReplConfig, FileSessionConfig,
};
pub use logging::JsonlConversationLogger;
pub use ollama::{
    error::{OllamaError, Result},
    gateway::{DEFAULT_BASE_URL, OllamaGateway},
};
