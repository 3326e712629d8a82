//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the locally hosted models a session can talk to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
