//! Recording layout-error handler for unit and integration tests.
//!
//! # Usage in tests
//!
//! ```ignore
//! let handler = Arc::new(RecordingErrorHandler::new());
//! let presentation = Presentation::new(&window, "demo", handler.clone());
//!
//! let errors = handler.errors.lock().unwrap();
//! assert_eq!(errors.len(), 1);
//! ```

use std::sync::Mutex;

use crate::application::presentation::LayoutErrorHandler;
use crate::domain::window::LayoutError;

/// Records each handled error in order.
#[derive(Default)]
pub struct RecordingErrorHandler {
    pub errors: Mutex<Vec<LayoutError>>,
}

impl RecordingErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutErrorHandler for RecordingErrorHandler {
    fn handle(&self, error: &LayoutError) {
        self.errors.lock().unwrap().push(error.clone());
    }
}
