//! Domain layer for the client.
//!
//! Pure types describing how the renderer should be started.  Nothing here
//! performs I/O or talks to the rendering toolkit.

pub mod window;

pub use window::{LayoutError, LayoutErrorKind, WindowFlags, WindowOptions};
