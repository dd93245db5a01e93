//! Presentation: the hand-off point between the loaded config and the toolkit.
//!
//! The toolkit reports layout problems through a callback.  Instead of
//! registering a process-wide callback, the caller injects a
//! [`LayoutErrorHandler`] when constructing [`Presentation`]; the
//! implementations live in the infrastructure layer.

use std::sync::Arc;

use cryptiom_core::WindowConfig;
use tracing::debug;

use crate::domain::window::{LayoutError, LayoutErrorKind, WindowOptions};

/// Receives layout errors raised while the presentation layer is running.
pub trait LayoutErrorHandler: Send + Sync {
    fn handle(&self, error: &LayoutError);
}

/// Start-up state for the renderer: window options plus the injected handler.
///
/// Built once from the loaded config.  The config itself is not retained, so
/// nothing downstream can mutate it.
pub struct Presentation {
    options: WindowOptions,
    handler: Arc<dyn LayoutErrorHandler>,
}

impl Presentation {
    /// Derives window options from `window` and stores `handler`.
    ///
    /// Non-positive dimensions are reported to `handler` as
    /// [`LayoutErrorKind::InvalidDimensions`] and replaced by the defaults.
    pub fn new(
        window: &WindowConfig,
        title: impl Into<String>,
        handler: Arc<dyn LayoutErrorHandler>,
    ) -> Self {
        let mut options = WindowOptions::from_config(window, title);

        if options.width <= 0 || options.height <= 0 {
            handler.handle(&LayoutError::new(
                LayoutErrorKind::InvalidDimensions,
                format!(
                    "window dimensions must be positive, got {}x{}; using {}x{}",
                    options.width,
                    options.height,
                    WindowConfig::DEFAULT_WIDTH,
                    WindowConfig::DEFAULT_HEIGHT
                ),
            ));
            options.width = WindowConfig::DEFAULT_WIDTH;
            options.height = WindowConfig::DEFAULT_HEIGHT;
        }

        debug!(?options, "presentation initialised");
        Self { options, handler }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Forwards a toolkit error to the injected handler.
    pub fn report(&self, error: &LayoutError) {
        self.handler.handle(error);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
