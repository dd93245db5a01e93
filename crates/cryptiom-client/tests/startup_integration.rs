//! Integration tests for client start-up.
//!
//! These exercise the public API end-to-end: config file on disk →
//! `bootstrap` → `Presentation` → injected handler.

use std::sync::Arc;

use cryptiom_client::application::startup::{bootstrap, StartupError};
use cryptiom_client::domain::{LayoutErrorKind, WindowFlags};
use cryptiom_client::infrastructure::error_handler::mock::RecordingErrorHandler;
use cryptiom_core::{encode_config, Config, WindowConfig};

#[test]
fn test_custom_config_drives_window_options() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let cfg = Config {
        window: WindowConfig {
            width: 1024,
            height: 768,
            vsync: false,
            anti_aliasing: true,
        },
    };
    std::fs::write(&path, encode_config(&cfg).unwrap()).unwrap();
    let handler = Arc::new(RecordingErrorHandler::new());

    // Act
    let presentation = bootstrap(&path, "Hello", handler.clone()).expect("start-up must succeed");

    // Assert
    let opts = presentation.options();
    assert_eq!((opts.width, opts.height), (1024, 768));
    assert_eq!(opts.title, "Hello");
    assert_eq!(
        opts.flags,
        WindowFlags(WindowFlags::RESIZABLE | WindowFlags::MSAA_4X_HINT)
    );
    assert!(handler.errors.lock().unwrap().is_empty());
}

#[test]
fn test_negative_height_in_file_reaches_injected_handler() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"window":{"width":640,"height":-1,"vsync":true,"antiAliasing":true}}"#,
    )
    .unwrap();
    let handler = Arc::new(RecordingErrorHandler::new());

    let presentation = bootstrap(&path, "demo", handler.clone()).unwrap();

    let errors = handler.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LayoutErrorKind::InvalidDimensions);
    assert_eq!(presentation.options().height, 600);
}

#[test]
fn test_uncreatable_config_path_is_reported_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("config.json");

    let result = bootstrap(&path, "demo", Arc::new(RecordingErrorHandler::new()));

    assert_eq!(
        result.err(),
        Some(StartupError::Config("Failed to create config file".to_string()))
    );
}
