//! LLM Gateway port
//!
//! Defines the interface for communicating with the chat model server.

use crate::config::GenerationParams;
use async_trait::async_trait;
use reasoner_domain::{Model, PromptMessage};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One non-streaming chat completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<PromptMessage>,
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn new(model: Model, messages: Vec<PromptMessage>, params: GenerationParams) -> Self {
        Self {
            model,
            messages,
            params,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model server.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the full message sequence and wait for the single text completion.
    ///
    /// An empty completion is a valid result.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;

    /// Names of the models installed on the server
    async fn available_models(&self) -> Result<Vec<String>, GatewayError>;
}
