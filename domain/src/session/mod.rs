//! Chat session domain.
//!
//! - [`entities::Turn`]: one message in the conversation
//! - [`entities::Transcript`]: the append-only ordered history of turns
//! - [`entities::ChatSession`]: the per-session state threaded through each request

pub mod entities;
