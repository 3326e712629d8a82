//! Ollama adapter.
//!
//! Talks to a local Ollama server over its HTTP chat API. Requests are
//! non-streaming: one POST, one JSON reply.

pub mod error;
pub mod gateway;
pub mod protocol;
