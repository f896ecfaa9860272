//! Progress notification port
//!
//! Defines the interface for reporting progress while an AI query is in flight.

use smartconv_domain::ModelId;

/// Callback for progress updates during an AI query
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, nothing).
pub trait AskProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, model: &ModelId);

    /// Called once the request finished, successfully or not
    fn on_request_end(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AskProgressNotifier for NoProgress {
    fn on_request_start(&self, _model: &ModelId) {}
    fn on_request_end(&self, _success: bool) {}
}
