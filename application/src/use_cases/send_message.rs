//! Send Message use case.
//!
//! One request cycle: append the user turn, rebuild the prompt from the
//! whole transcript, call the model once, append the raw reply.
//!
//! The [`ChatSession`] is passed in by value and handed back on success
//! and on failure alike. On failure the user turn stays in the transcript
//! without a matching assistant turn; nothing is retried or repaired.

use crate::config::GenerationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use reasoner_domain::util::preview;
use reasoner_domain::{ChatSession, SplitResponse, Turn, build_prompt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a request cycle.
#[derive(Error, Debug)]
pub enum SendMessageError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Message is empty")]
    EmptyMessage,
}

/// A failed request cycle, carrying the session back to the caller.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct SendMessageFailure {
    pub session: ChatSession,
    #[source]
    pub error: SendMessageError,
}

impl SendMessageFailure {
    pub fn new(session: ChatSession, error: SendMessageError) -> Self {
        Self { session, error }
    }

    /// Recover the session to keep the conversation going
    pub fn into_session(self) -> ChatSession {
        self.session
    }
}

/// Input for the [`SendMessageUseCase`].
#[derive(Debug, Clone)]
pub struct SendMessageInput {
    /// The user's message, sent verbatim.
    pub text: String,
    /// Sampling parameters for this call.
    pub params: GenerationParams,
}

impl SendMessageInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

/// Result of a successful request cycle.
#[derive(Debug, Clone)]
pub struct SendMessageOutput {
    /// The session with both new turns appended.
    pub session: ChatSession,
    /// Raw model output, as stored in the transcript.
    pub raw_response: String,
}

impl SendMessageOutput {
    /// Reasoning and answer segments of the reply
    pub fn split(&self) -> SplitResponse {
        SplitResponse::parse(&self.raw_response)
    }
}

/// Use case for one user → model exchange.
#[derive(Clone)]
pub struct SendMessageUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SendMessageUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute one request cycle with progress callbacks.
    pub async fn execute(
        &self,
        mut session: ChatSession,
        input: SendMessageInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<SendMessageOutput, SendMessageFailure> {
        if input.text.is_empty() {
            return Err(SendMessageFailure::new(
                session,
                SendMessageError::EmptyMessage,
            ));
        }

        let model = session.model();
        let approach = session.approach();

        info!(
            "Sending message to {} ({}): {}",
            model,
            approach,
            preview(&input.text, 100)
        );

        session
            .transcript_mut()
            .append(Turn::user(input.text.clone()));

        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({
                "model": model.to_string(),
                "approach": approach.label(),
                "text": input.text,
            }),
        ));

        let messages = build_prompt(session.transcript(), approach);
        debug!(
            "Assembled prompt: {} messages from {} turns",
            messages.len(),
            session.transcript().len()
        );

        let request = CompletionRequest::new(model, messages, input.params);

        progress.on_request_start(&model, approach);
        let result = self.gateway.complete(&request).await;
        progress.on_request_complete(&model, result.is_ok());

        match result {
            Ok(raw) => {
                if SplitResponse::parse(&raw).is_empty() {
                    warn!("Model response contains no extractable segments");
                }

                self.conversation_logger.log(ConversationEvent::new(
                    "llm_response",
                    serde_json::json!({
                        "model": model.to_string(),
                        "bytes": raw.len(),
                        "text": raw,
                    }),
                ));

                session.transcript_mut().append(Turn::assistant(raw.clone()));
                info!("Response received ({} bytes)", raw.len());

                Ok(SendMessageOutput {
                    session,
                    raw_response: raw,
                })
            }
            Err(e) => {
                warn!("Model call failed: {}", e);

                self.conversation_logger.log(ConversationEvent::new(
                    "llm_error",
                    serde_json::json!({
                        "model": model.to_string(),
                        "error": e.to_string(),
                    }),
                ));

                Err(SendMessageFailure::new(session, e.into()))
            }
        }
    }
}
