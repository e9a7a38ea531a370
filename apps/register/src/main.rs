//! # barber-register Entry Point
//!
//! ```text
//! ┌────────────────────┐  JSON lines   ┌─────────────────────┐
//! │  Register client   │──────────────►│   barber-register   │
//! │  (cart screen,     │◄──────────────│   (this binary)     │
//! │   payment dialog)  │  JSON lines   └──────────┬──────────┘
//! └────────────────────┘                          │ stderr
//!                                                 ▼
//!                                              logs
//! ```
//!
//! The actual setup is in lib.rs so tests can drive the command loop.

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    match barber_register::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "barber-register stopped");
            ExitCode::FAILURE
        }
    }
}
