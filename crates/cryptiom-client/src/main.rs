//! Cryptiom Client entry point.
//!
//! Loads the window config once, then hands the derived window options to the
//! rendering toolkit.
//!
//! # Usage
//!
//! ```text
//! cryptiom-client [OPTIONS]
//!
//! Options:
//!   -c, --config <PATH>   Path to the JSON config file [default: config.json]
//!       --title <TITLE>   Window title [default: "Hello Clay+Raylib"]
//! ```
//!
//! # Exit status
//!
//! `0` on success.  `1` if the config cannot be created, read, or decoded;
//! the pipeline's message is printed to stderr as
//! `Failed to load config: <message>`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use cryptiom_client::application::startup::bootstrap;
use cryptiom_client::infrastructure::error_handler::LoggingErrorHandler;
use cryptiom_client::infrastructure::logging::init_logging;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Cryptiom desktop client.
#[derive(Debug, Parser)]
#[command(name = "cryptiom-client", about = "Cryptiom desktop client", version)]
struct Cli {
    /// Path to the JSON config file.
    ///
    /// Created with default values if it does not exist.
    #[arg(short, long, default_value = "config.json", env = "CRYPTIOM_CONFIG")]
    config: PathBuf,

    /// Window title passed to the toolkit.
    #[arg(long, default_value = "Hello Clay+Raylib")]
    title: String,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let presentation = bootstrap(&cli.config, &cli.title, Arc::new(LoggingErrorHandler))?;

    let options = presentation.options();
    info!(
        "window ready: {}x{} \"{}\" flags=0x{:08X}",
        options.width, options.height, options.title, options.flags.0
    );

    // The toolkit's render loop takes over from here and owns `presentation`.
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
