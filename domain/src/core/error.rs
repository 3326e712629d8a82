//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown model: {0} (expected one of: deepseek-r1:7b, deepseek-r1:1.5b)")]
    UnknownModel(String),

    #[error(
        "Unknown reasoning approach: {0} (expected one of: Analytical, Critical, Strategic, Systems Thinking)"
    )]
    UnknownApproach(String),
}
