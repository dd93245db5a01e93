//! Window start-up parameters derived from the loaded [`WindowConfig`].
//!
//! The rendering toolkit takes a width, a height, a title, and a bit set of
//! configuration hints.  [`WindowOptions::from_config`] is the only place the
//! config's booleans are translated into those hints.

use cryptiom_core::WindowConfig;
use thiserror::Error;

/// Bit set of window configuration hints passed to the toolkit at init.
///
/// Bit values match the toolkit's `ConfigFlags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowFlags(pub u32);

impl WindowFlags {
    pub const RESIZABLE: u32 = 0x0000_0004;
    pub const MSAA_4X_HINT: u32 = 0x0000_0020;
    pub const VSYNC_HINT: u32 = 0x0000_0040;

    /// Returns `true` if every bit in `flag` is set.
    pub fn contains(&self, flag: u32) -> bool {
        self.0 & flag == flag
    }
}

/// Everything the toolkit needs to open the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub flags: WindowFlags,
}

impl WindowOptions {
    /// Builds start-up options from the window section of the config.
    ///
    /// The window is always resizable; MSAA and vsync hints follow the config.
    pub fn from_config(window: &WindowConfig, title: impl Into<String>) -> Self {
        let mut flags = WindowFlags::RESIZABLE;
        if window.anti_aliasing {
            flags |= WindowFlags::MSAA_4X_HINT;
        }
        if window.vsync {
            flags |= WindowFlags::VSYNC_HINT;
        }

        Self {
            width: window.width,
            height: window.height,
            title: title.into(),
            flags: WindowFlags(flags),
        }
    }
}

/// Category of a layout error reported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutErrorKind {
    /// Layout dimensions were zero or negative.
    InvalidDimensions,
    /// Two layout elements were declared with the same id.
    DuplicateId,
    /// The layout arena ran out of memory.
    ArenaCapacityExceeded,
    /// Any other toolkit-reported failure.
    Internal,
}

/// An error raised by the layout toolkit, handed to the injected handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {text}")]
pub struct LayoutError {
    pub kind: LayoutErrorKind,
    pub text: String,
}

impl LayoutError {
    pub fn new(kind: LayoutErrorKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
