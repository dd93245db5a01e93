//! # cryptiom-core
//!
//! Shared library for the Cryptiom client containing the typed result/option
//! algebra and the persisted configuration pipeline built on top of it.
//!
//! It has zero dependencies on windowing, rendering, or UI toolkits.  The only
//! I/O it performs is reading and writing the config file in
//! [`config::pipeline`].
//!
//! # Architecture overview (for beginners)
//!
//! The client is a small desktop rendering demo.  Before it opens a window it
//! needs to know how big the window should be and which rendering hints to
//! enable.  Those settings live in a JSON file next to the binary.  This crate
//! defines:
//!
//! - **`algebra`** – Two tagged unions used as the error-propagation
//!   vocabulary of the whole project: [`Outcome`] ("success or error") and
//!   [`Maybe`] ("present or absent").  Every fallible public operation returns
//!   one of them instead of panicking.
//!
//! - **`config`** – The config schema (`Config`, `WindowConfig`), its JSON
//!   encoding, and the two pipeline entry points [`parse_config`] and
//!   [`load_config`].  `load_config` creates the file with default values the
//!   first time it runs.

pub mod algebra;
pub mod config;

// Re-export the most-used items at the crate root so callers can write
// `cryptiom_core::load_config` instead of `cryptiom_core::config::pipeline::load_config`.
pub use algebra::{Maybe, Outcome};
pub use config::pipeline::{load_config, parse_config, save_config, ConfigError};
pub use config::schema::{encode_config, Config, WindowConfig};
