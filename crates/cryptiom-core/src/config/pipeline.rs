//! Load-or-create-default config pipeline.
//!
//! ```text
//! load_config(path)
//!   ├─ open for read ── ok ──▶ read to string ──▶ parse_config ──▶ Ok | Err
//!   └─ open fails ──▶ create ──▶ write Config::default() ──▶ re-parse ──▶ Ok | Err
//! ```
//!
//! There is no retry loop: the first failing step ends the call with an
//! `Err`.  An existing file that fails to decode is never rewritten.
//!
//! # Error messages
//!
//! Both public entry points return `Outcome<_, String>`.  Internally each step
//! produces a typed [`ConfigError`]; its `Display` text is the message the
//! caller receives, so the prefixes below are part of the contract:
//!
//! | Step                         | Message prefix                      |
//! |------------------------------|-------------------------------------|
//! | decode of any text           | `Failed to parse config: `          |
//! | create missing file          | `Failed to create config file`      |
//! | write default / saved config | `Failed to write config file: `     |
//! | re-parse of written default  | `Failed to parse default config: `  |
//! | read of existing file        | `Failed to parse config file: `     |

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::algebra::Outcome;
use crate::config::schema::{encode_config, Config};

/// Error type for config decoding and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text does not match the schema (syntax, missing/extra/mistyped field).
    #[error("Failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),

    /// The config file was absent and could not be created.
    #[error("Failed to create config file")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing encoded text to the config file failed.
    #[error("Failed to write config file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config could not be encoded.
    #[error("Failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),

    /// The freshly written default did not decode.  Indicates a defect in
    /// [`Config::default`] or the encoder, never bad user input.
    #[error("Failed to parse default config: {0}")]
    DefaultRoundTrip(#[source] serde_json::Error),

    /// The existing config file could not be read in full.
    #[error("Failed to parse config file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes `text` into a [`Config`].
///
/// Never panics on malformed input; every decode failure becomes an `Err`
/// whose message starts with `"Failed to parse config: "`.
///
/// # Examples
///
/// ```rust
/// use cryptiom_core::parse_config;
///
/// let text = r#"{"window":{"width":1024,"height":768,"vsync":false,"antiAliasing":false}}"#;
/// let cfg = parse_config(text).unwrap();
/// assert_eq!(cfg.window.width, 1024);
///
/// let err = parse_config("{not valid}").unwrap_err();
/// assert!(err.starts_with("Failed to parse config: "));
/// ```
pub fn parse_config(text: &str) -> Outcome<Config, String> {
    decode(text).map_err(|e| e.to_string()).into()
}

/// Loads the config at `path`, creating it with [`Config::default`] if it
/// cannot be opened for reading.
///
/// The returned message on failure follows the table in the module docs.
/// The file handle is closed before this function returns on every path.
pub fn load_config(path: impl AsRef<Path>) -> Outcome<Config, String> {
    let path = path.as_ref();

    let result = match File::open(path) {
        Ok(file) => {
            debug!(path = %path.display(), "reading existing config");
            read_existing(path, file)
        }
        Err(e) => {
            debug!(path = %path.display(), "config not readable ({e}); creating default");
            create_default(path)
        }
    };

    if let Err(e) = &result {
        warn!(path = %path.display(), "config load failed: {e}");
    }
    result.map_err(|e| e.to_string()).into()
}

/// Encodes `config` and writes it to `path`, creating or truncating the file.
pub fn save_config(path: impl AsRef<Path>, config: &Config) -> Outcome<(), String> {
    let path = path.as_ref();

    let result = encode_config(config)
        .map_err(ConfigError::Encode)
        .and_then(|text| {
            let mut file = create_file(path)?;
            write_text(path, &mut file, &text)
        });

    if let Err(e) = &result {
        warn!(path = %path.display(), "config save failed: {e}");
    }
    result.map_err(|e| e.to_string()).into()
}

// ── Pipeline steps ────────────────────────────────────────────────────────────

fn decode(text: &str) -> Result<Config, ConfigError> {
    serde_json::from_str(text).map_err(ConfigError::Parse)
}

fn read_existing(path: &Path, mut file: File) -> Result<Config, ConfigError> {
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    decode(&text)
}

fn create_default(path: &Path) -> Result<Config, ConfigError> {
    let mut file = create_file(path)?;

    let text = encode_config(&Config::default()).map_err(ConfigError::Encode)?;
    write_text(path, &mut file, &text)?;
    drop(file);

    info!(path = %path.display(), "wrote default config");

    // Decode what was written rather than returning the in-memory default, so
    // the returned value is exactly what the next run will read back.
    serde_json::from_str(&text).map_err(ConfigError::DefaultRoundTrip)
}

fn create_file(path: &Path) -> Result<File, ConfigError> {
    File::create(path).map_err(|source| ConfigError::Create {
        path: path.to_path_buf(),
        source,
    })
}

fn write_text(path: &Path, file: &mut File, text: &str) -> Result<(), ConfigError> {
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::WindowConfig;

    #[test]
    fn test_parse_config_accepts_well_formed_text() {
        // Arrange
        let text = r#"{"window":{"width":1024,"height":768,"vsync":false,"antiAliasing":false}}"#;

        // Act
        let cfg = parse_config(text).unwrap();

        // Assert
        assert_eq!(
            cfg.window,
            WindowConfig {
                width: 1024,
                height: 768,
                vsync: false,
                anti_aliasing: false,
            }
        );
    }

    #[test]
    fn test_parse_config_error_has_prefix_and_diagnostic() {
        let err = parse_config("{not valid}").unwrap_err();

        assert!(err.starts_with("Failed to parse config: "), "got: {err}");
        assert!(err.len() > "Failed to parse config: ".len(), "diagnostic missing: {err}");
    }

    #[test]
    fn test_parse_config_empty_text_is_err() {
        assert!(parse_config("").is_err());
    }

    #[test]
    fn test_parse_config_missing_window_section_is_err() {
        let err = parse_config("{}").unwrap_err();
        assert!(err.contains("window"), "got: {err}");
    }

    #[test]
    fn test_decode_failure_maps_to_parse_variant() {
        let err = decode("[]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_create_error_message_is_fixed_text() {
        // Arrange: a file inside a directory that does not exist cannot be created.
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing-subdir").join("config.json");

        // Act
        let err = create_default(&path).unwrap_err();

        // Assert
        assert!(matches!(err, ConfigError::Create { .. }));
        assert_eq!(err.to_string(), "Failed to create config file");
    }

    #[test]
    fn test_read_error_uses_config_file_prefix() {
        // Arrange: invalid UTF-8 makes `read_to_string` fail.
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");
        let file = File::open(&path).expect("open");

        // Act
        let err = read_existing(&path, file).unwrap_err();

        // Assert
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file: "));
    }

    #[test]
    fn test_save_config_then_parse_round_trips() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        let cfg = Config {
            window: WindowConfig {
                width: 1280,
                height: 720,
                vsync: true,
                anti_aliasing: false,
            },
        };

        // Act
        save_config(&path, &cfg).unwrap();
        let text = std::fs::read_to_string(&path).expect("read back");

        // Assert
        assert_eq!(parse_config(&text).unwrap(), cfg);
    }

    #[test]
    fn test_save_config_into_missing_dir_reports_create_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope").join("config.json");

        let err = save_config(&path, &Config::default()).unwrap_err();

        assert_eq!(err, "Failed to create config file");
    }
}
