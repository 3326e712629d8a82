//! Reasoning approach selection.
//!
//! The approach only parameterizes the system instruction. It has no effect
//! on how responses are parsed.

mod approach;

pub use approach::ReasoningApproach;
