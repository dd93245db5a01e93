//! cryptiom-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the client do at start-up? (for beginners)
//!
//! 1. Initialise logging.
//! 2. Load `config.json` through [`cryptiom_core::load_config`].  On the very
//!    first run the file does not exist yet, so the pipeline writes one with
//!    default values.
//! 3. If loading fails, print the message and exit with status 1.
//! 4. Otherwise derive [`WindowOptions`](domain::WindowOptions) from the
//!    window section and hand them, together with an injected layout-error
//!    handler, to the rendering toolkit.
//!
//! Rendering and layout are done by the external toolkit and are not part of
//! this crate.

/// Domain layer: window options and layout error types.
pub mod domain;

/// Application layer: start-up use case and presentation state.
pub mod application;

/// Infrastructure layer: error handlers and logging.
pub mod infrastructure;
