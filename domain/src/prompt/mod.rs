//! Prompt domain
//!
//! The system instruction template and the assembly of the role-tagged
//! message sequence sent to the model on every request.

mod assembler;
mod template;

pub use assembler::{PromptMessage, PromptRole, build_prompt};
pub use template::PromptTemplate;
