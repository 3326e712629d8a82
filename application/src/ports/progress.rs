//! Progress notification port
//!
//! Defines the interface for reporting progress while a request is in flight.

use reasoner_domain::{Model, ReasoningApproach};

/// Callback for progress updates during a request cycle
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the model is invoked
    fn on_request_start(&self, model: &Model, approach: ReasoningApproach);

    /// Called when the model call returns or fails
    fn on_request_complete(&self, model: &Model, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _model: &Model, _approach: ReasoningApproach) {}
    fn on_request_complete(&self, _model: &Model, _success: bool) {}
}
