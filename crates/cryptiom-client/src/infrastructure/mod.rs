//! Infrastructure layer for the client application.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain`, and
//! `cryptiom_core`, but MUST NOT be imported by the `application` or `domain`
//! layers outside of tests.
//!
//! # Sub-modules
//!
//! - **`error_handler`** – Implementations of `LayoutErrorHandler`: one that
//!   logs, and a recording mock for tests.
//! - **`logging`** – `tracing-subscriber` initialisation for the binary.

pub mod error_handler;
pub mod logging;
