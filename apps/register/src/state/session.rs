//! # Register Session
//!
//! The one transaction the register is working on, and where it is in its
//! lifecycle.
//!
//! ## Transaction Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐   checkout    ┌─────────────────┐  confirm   ┌────────┐ │
//! │   │   Open   │──────────────►│ AwaitingPayment │───────────►│Receipt │ │
//! │   │          │◄──────────────│                 │            │ Issued │ │
//! │   └──────────┘ cancel_payment└─────────────────┘            └────────┘ │
//! │     ▲    │                                                      │      │
//! │     │    └── toggle / add / set qty / customer                  │      │
//! │     │                                                           │      │
//! │     └──────────────────── complete (cart cleared) ◄─────────────┘      │
//! │                                                                         │
//! │   Checkout of an empty cart leaves the session Open.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use barber_core::print::PrintJob;
use barber_core::{Catalog, Receipt, Transaction};
use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;

use super::ConfigState;

/// Where the current transaction is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Cart is editable.
    #[default]
    Open,
    /// Payment dialog is showing; only the payment method can change.
    AwaitingPayment,
    /// Payment confirmed and a receipt exists.
    ReceiptIssued,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Open => "open",
            Phase::AwaitingPayment => "awaiting payment",
            Phase::ReceiptIssued => "receipt issued",
        };
        f.write_str(label)
    }
}

/// A command arrived in a phase that does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {action} while the transaction is {phase}")]
pub struct PhaseError {
    pub action: &'static str,
    pub phase: Phase,
}

impl PhaseError {
    pub fn new(action: &'static str, phase: Phase) -> Self {
        PhaseError { action, phase }
    }
}

type Clock = Box<dyn Fn() -> DateTime<Local>>;

/// Session state for one register.
pub struct RegisterState {
    config: ConfigState,
    catalog: Box<dyn Catalog>,
    transaction: Transaction,
    phase: Phase,
    receipt: Option<Receipt>,
    clock: Clock,
}

impl RegisterState {
    /// Creates a session with an empty transaction at the configured tax
    /// rate.
    pub fn new(config: ConfigState, catalog: impl Catalog + 'static) -> Self {
        let transaction = Transaction::with_tax_rate(config.tax_rate());
        RegisterState {
            config,
            catalog: Box::new(catalog),
            transaction,
            phase: Phase::Open,
            receipt: None,
            clock: Box::new(Local::now),
        }
    }

    /// Replaces the wall clock used for receipt stamps and print job ids.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Local> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The receipt issued for the current transaction, if any.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    fn require(&self, action: &'static str, allowed: &[Phase]) -> Result<(), PhaseError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(PhaseError::new(action, self.phase))
        }
    }

    /// Opens the cart for editing. Only allowed while `Open`.
    ///
    /// Hands back the catalog alongside the transaction so a lookup and the
    /// edit can happen under one borrow.
    pub fn edit(
        &mut self,
        action: &'static str,
    ) -> Result<(&dyn Catalog, &mut Transaction), PhaseError> {
        self.require(action, &[Phase::Open])?;
        Ok((self.catalog.as_ref(), &mut self.transaction))
    }

    /// The payment method may change on the cart screen and in the payment
    /// dialog.
    pub fn edit_payment(&mut self, action: &'static str) -> Result<&mut Transaction, PhaseError> {
        self.require(action, &[Phase::Open, Phase::AwaitingPayment])?;
        Ok(&mut self.transaction)
    }

    /// Moves to `AwaitingPayment`.
    ///
    /// Returns `false` and stays `Open` when the cart is empty.
    pub fn begin_payment(&mut self) -> Result<bool, PhaseError> {
        self.require("check out", &[Phase::Open])?;

        if self.transaction.is_empty() {
            return Ok(false);
        }

        self.phase = Phase::AwaitingPayment;
        Ok(true)
    }

    /// Closes the payment dialog without paying.
    pub fn cancel_payment(&mut self) -> Result<(), PhaseError> {
        self.require("cancel payment", &[Phase::AwaitingPayment])?;
        self.phase = Phase::Open;
        Ok(())
    }

    /// Confirms payment and issues the receipt, stamped with the current
    /// local time.
    pub fn issue_receipt(&mut self) -> Result<&Receipt, PhaseError> {
        self.require("confirm payment", &[Phase::AwaitingPayment])?;

        let issued_at = (self.clock)().naive_local();
        let receipt = self
            .config
            .receipt_builder()
            .build(&self.transaction, issued_at);

        self.phase = Phase::ReceiptIssued;
        Ok(self.receipt.insert(receipt))
    }

    /// Builds the print bridge hand-off for the issued receipt. The job id
    /// is the current time in epoch milliseconds.
    pub fn print_job(&self) -> Result<PrintJob, PhaseError> {
        match (self.phase, &self.receipt) {
            (Phase::ReceiptIssued, Some(receipt)) => {
                let job_id = (self.clock)().timestamp_millis();
                Ok(PrintJob::for_receipt(
                    receipt,
                    &self.config.print_origin,
                    job_id,
                ))
            }
            (phase, _) => Err(PhaseError::new("print the receipt", phase)),
        }
    }

    /// Finishes the sale: the cart is cleared and the session is `Open`
    /// again.
    pub fn complete(&mut self) -> Result<(), PhaseError> {
        self.require("complete the transaction", &[Phase::ReceiptIssued])?;

        self.transaction.clear();
        self.receipt = None;
        self.phase = Phase::Open;
        Ok(())
    }
}
