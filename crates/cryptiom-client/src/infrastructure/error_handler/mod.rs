//! [`LayoutErrorHandler`] implementations.
//!
//! - [`LoggingErrorHandler`] – production handler; logs each error through
//!   `tracing`.
//! - [`mock::RecordingErrorHandler`] – test handler that records every error.

pub mod mock;

use tracing::error;

use crate::application::presentation::LayoutErrorHandler;
use crate::domain::window::LayoutError;

/// Logs every layout error at `error` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingErrorHandler;

impl LayoutErrorHandler for LoggingErrorHandler {
    fn handle(&self, err: &LayoutError) {
        error!(kind = ?err.kind, "layout error: {}", err.text);
    }
}
