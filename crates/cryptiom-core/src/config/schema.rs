//! Config schema types and their JSON encoding.
//!
//! The file on disk looks like this:
//!
//! ```json
//! {
//!   "window": {
//!     "width": 800,
//!     "height": 600,
//!     "vsync": true,
//!     "antiAliasing": true
//!   }
//! }
//! ```
//!
//! # Strict decoding
//!
//! Unlike a typical settings file, no field here carries `#[serde(default)]`
//! and every record is `deny_unknown_fields`.  A missing, misspelt, or extra
//! key is a decode error.  Defaults only apply when the whole file is absent,
//! in which case [`load_config`](crate::load_config) writes
//! [`Config::default`] out in full.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored on disk.
///
/// New sections are added as further named fields next to `window`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
}

/// Window creation settings read once at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// Initial window width in pixels.
    pub width: i32,
    /// Initial window height in pixels.
    pub height: i32,
    /// Whether to request vertical sync from the renderer.
    pub vsync: bool,
    /// Whether to request 4x MSAA from the renderer.
    #[serde(rename = "antiAliasing")]
    pub anti_aliasing: bool,
}

impl WindowConfig {
    pub const DEFAULT_WIDTH: i32 = 800;
    pub const DEFAULT_HEIGHT: i32 = 600;
}

impl Default for WindowConfig {
    /// 800×600 with vsync and anti-aliasing enabled.
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            vsync: true,
            anti_aliasing: true,
        }
    }
}

/// Encodes `config` as pretty-printed JSON, the format written to disk.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if serialization fails.  The
/// records in this module only hold integers and booleans, so today it never
/// does.
pub fn encode_config(config: &Config) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
