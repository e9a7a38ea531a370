//! # barber-register
//!
//! The register process: one cart session driven by JSON commands.
//!
//! ## Module Organization
//! ```text
//! barber_register/
//! ├── lib.rs          ◄─── You are here (startup, command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── ConfigState (defaults, TOML, env)
//! │   └── session.rs  ◄─── RegisterState (transaction + phase)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command decoding, dispatch, response envelope
//! │   ├── catalog.rs  ◄─── Catalog listing
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── checkout.rs ◄─── Payment, receipt, print, completion
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Protocol
//! One JSON command per input line, one JSON response per output line.
//! Logs go to stderr so stdout carries nothing but responses.

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use barber_core::InMemoryCatalog;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use state::{ConfigState, RegisterState};

/// Runs the register on stdin/stdout until input closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─── tracing-subscriber, RUST_LOG, stderr         │
/// │  2. Load Configuration ─── defaults → BARBER_CONFIG file → BARBER_* env │
/// │  3. Create Session ─────── sample catalog, empty transaction            │
/// │  4. Serve ──────────────── one response per command line until EOF      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting barber-register");

    let config = ConfigState::load().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        shop = %config.shop.name,
        tax = %config.tax_rate().percent_label(),
        print_origin = %config.print_origin,
        "Configuration loaded"
    );

    let mut state = RegisterState::new(config, InMemoryCatalog::sample());

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&mut state, stdin.lock(), stdout.lock())?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Answers every non-blank line of `input` with one line on `output`.
pub fn serve<R, W>(state: &mut RegisterState, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = commands::handle_line(state, line);
        let encoded = serde_json::to_string(&response)?;

        writeln!(output, "{}", encoded)?;
        output.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=barber_register=trace` - Trace for the register only
/// - Default: `info,barber=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,barber=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
