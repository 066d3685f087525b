//! Cooperative cancellation

use crate::error::ExtractorError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that stops an analysis before its next query
///
/// Clones share the same flag, so one can be handed to another thread (or a
/// signal handler) while the analysis runs.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag that is not raised
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether the flag has been raised
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once the flag is raised
    pub fn check(&self) -> Result<(), ExtractorError> {
        if self.is_cancelled() {
            Err(ExtractorError::Cancelled)
        } else {
            Ok(())
        }
    }
}
