//! Client configuration: schema and persistence.
//!
//! - **`schema`** – Plain data records (`Config`, `WindowConfig`), their
//!   canonical defaults, and the JSON encoding used on disk.
//! - **`pipeline`** – `parse_config` and `load_config`, the two entry points
//!   the presentation layer calls.  All failures come back as
//!   [`Outcome::Err`](crate::Outcome::Err) carrying a descriptive message.
//!
//! Keeping file-system access inside `pipeline` means the schema can be
//! exercised in tests without touching the disk.

pub mod pipeline;
pub mod schema;

pub use pipeline::{load_config, parse_config, save_config, ConfigError};
pub use schema::{encode_config, Config, WindowConfig};
