//! # State Module
//!
//! State owned by the register process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────────────┐  │
//! │  │    ConfigState       │        │        RegisterState             │  │
//! │  │                      │ owned  │                                  │  │
//! │  │  shop profile        │◄───────│  catalog (Box<dyn Catalog>)      │  │
//! │  │  tax rate            │        │  transaction                     │  │
//! │  │  currency style      │        │  phase                           │  │
//! │  │  print origin        │        │  issued receipt                  │  │
//! │  └──────────────────────┘        └──────────────────────────────────┘  │
//! │                                                                         │
//! │  One command at a time: the session has a single owner and needs no    │
//! │  locking. ConfigState is read-only after startup.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState};
pub use session::{Phase, PhaseError, RegisterState};
