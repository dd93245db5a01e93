//! Start-up use case: load the config exactly once and build the presentation.

use std::path::Path;
use std::sync::Arc;

use cryptiom_core::{load_config, Outcome};
use thiserror::Error;
use tracing::info;

use crate::application::presentation::{LayoutErrorHandler, Presentation};

/// Error type for client start-up.
#[derive(Debug, Error, PartialEq)]
pub enum StartupError {
    /// The config pipeline returned an error message.
    #[error("Failed to load config: {0}")]
    Config(String),
}

/// Loads the config at `config_path` and builds the [`Presentation`].
///
/// A missing config file is created with defaults by the pipeline.
///
/// # Errors
///
/// Returns [`StartupError::Config`] carrying the pipeline's message when the
/// file cannot be created, read, or decoded.
pub fn bootstrap(
    config_path: &Path,
    title: &str,
    handler: Arc<dyn LayoutErrorHandler>,
) -> Result<Presentation, StartupError> {
    let config = match load_config(config_path) {
        Outcome::Ok(config) => config,
        Outcome::Err(message) => return Err(StartupError::Config(message)),
    };

    info!(
        path = %config_path.display(),
        width = config.window.width,
        height = config.window.height,
        vsync = config.window.vsync,
        anti_aliasing = config.window.anti_aliasing,
        "config loaded"
    );

    Ok(Presentation::new(&config.window, title, handler))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
