//! Application layer use cases for the client.
//!
//! - **`startup`** – Calls the config pipeline once and turns the result into
//!   either a [`Presentation`](presentation::Presentation) or a
//!   [`StartupError`](startup::StartupError).
//!
//! - **`presentation`** – Holds the window options and the injected
//!   [`LayoutErrorHandler`](presentation::LayoutErrorHandler).  The concrete
//!   handlers live in the infrastructure layer.

pub mod presentation;
pub mod startup;
