//! Domain layer for reasoner
//!
//! This crate contains the conversation model and the two pieces of
//! non-trivial logic: assembling the multi-turn prompt and splitting the
//! model's tagged output. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Transcript**: append-only ordered turns, starting with a greeting
//! - **ChatSession**: transcript + model + reasoning approach, threaded
//!   through each request by the caller
//! - **Prompt assembly**: system instruction + replayed history
//! - **Response splitting**: `<think>` / `<response>` segment extraction

pub mod core;
pub mod prompt;
pub mod reasoning;
pub mod response;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use prompt::{PromptMessage, PromptRole, PromptTemplate, build_prompt};
pub use reasoning::ReasoningApproach;
pub use response::{SplitResponse, extract_segment};
pub use session::entities::{ChatSession, GREETING, Role, Transcript, Turn};
