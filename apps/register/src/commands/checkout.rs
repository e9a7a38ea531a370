//! # Checkout Commands
//!
//! From a filled cart to a printed receipt and back to an empty register.
//!
//! ```text
//! checkout ──► (payment dialog) ──► confirm_payment ──► print_receipt ──► complete_transaction
//!                    │                      │                 │
//!              cancel_payment          Receipt          PrintJob (URI + items)
//! ```

use barber_core::print::PrintJob;
use barber_core::{Receipt, Totals};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{Phase, RegisterState};

/// Result of a checkout attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// `false` when the cart was empty and nothing happened.
    pub accepted: bool,
    pub phase: Phase,
    pub totals: Totals,
}

/// Opens the payment dialog.
///
/// An empty cart is not an error: the response carries `accepted: false`
/// and the register stays on the cart screen.
pub fn checkout(state: &mut RegisterState) -> Result<CheckoutResponse, ApiError> {
    debug!("checkout command");

    let accepted = state.begin_payment()?;
    let totals = state.transaction().totals();

    if accepted {
        info!(
            services = state.transaction().services().len(),
            products = state.transaction().product_lines().len(),
            total = %totals.total,
            "Checkout started"
        );
    } else {
        warn!("Checkout ignored: cart is empty");
    }

    Ok(CheckoutResponse {
        accepted,
        phase: state.phase(),
        totals,
    })
}

/// Closes the payment dialog and returns to the cart.
pub fn cancel_payment(state: &mut RegisterState) -> Result<CartResponse, ApiError> {
    debug!("cancel_payment command");

    state.cancel_payment()?;
    info!("Payment cancelled");

    Ok(CartResponse::from(&*state))
}

/// Confirms payment and issues the receipt.
pub fn confirm_payment(state: &mut RegisterState) -> Result<Receipt, ApiError> {
    debug!("confirm_payment command");

    let receipt = state.issue_receipt()?.clone();
    info!(
        transaction_id = %receipt.transaction_id,
        total = %receipt.totals.total,
        payment = %state.transaction().payment_method,
        "Payment confirmed, receipt issued"
    );

    Ok(receipt)
}

/// Produces the print bridge hand-off for the issued receipt.
///
/// May be called more than once (reprint).
pub fn print_receipt(state: &RegisterState) -> Result<PrintJob, ApiError> {
    debug!("print_receipt command");

    let job = state.print_job()?;
    info!(uri = %job.uri, lines = job.items.len(), "Print job prepared");

    Ok(job)
}

/// Ends the sale and resets the register for the next customer.
pub fn complete_transaction(state: &mut RegisterState) -> Result<CartResponse, ApiError> {
    debug!("complete_transaction command");

    state.complete()?;
    info!("Transaction completed, cart cleared");

    Ok(CartResponse::from(&*state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_product, set_customer, toggle_service};
    use crate::error::ErrorCode;
    use crate::state::ConfigState;
    use barber_core::InMemoryCatalog;

    fn session() -> RegisterState {
        RegisterState::new(ConfigState::default(), InMemoryCatalog::sample())
    }

    #[test]
    fn test_empty_checkout_is_not_accepted() {
        let mut state = session();
        let response = checkout(&mut state).unwrap();

        assert!(!response.accepted);
        assert_eq!(response.phase, Phase::Open);
        assert!(response.totals.total.is_zero());
    }

    #[test]
    fn test_checkout_to_completion() {
        let mut state = session();
        toggle_service(&mut state, "1").unwrap();
        add_product(&mut state, "p1").unwrap();
        add_product(&mut state, "p1").unwrap();
        set_customer(&mut state, "Ahmad Rizky", "").unwrap();

        let response = checkout(&mut state).unwrap();
        assert!(response.accepted);
        assert_eq!(response.phase, Phase::AwaitingPayment);
        assert_eq!(response.totals.total.rupiah(), 269_500);

        let receipt = confirm_payment(&mut state).unwrap();
        let contents: Vec<&str> = receipt.lines.iter().map(|l| l.content.as_str()).collect();
        assert!(contents.contains(&"Customer: Ahmad Rizky"));
        assert!(contents.contains(&"Premium Pomade x2"));
        assert!(contents.contains(&"TOTAL: Rp 269.500"));

        let job = print_receipt(&state).unwrap();
        assert_eq!(job.items.len(), receipt.lines.len());
        assert!(job.uri.starts_with("my.bluetoothprint.scheme://http://localhost:3000/api/print-receipt?id="));

        let cart = complete_transaction(&mut state).unwrap();
        assert!(cart.is_empty);
        assert_eq!(cart.phase, Phase::Open);
    }

    #[test]
    fn test_print_before_payment_is_invalid_state() {
        let mut state = session();
        toggle_service(&mut state, "2").unwrap();

        let err = print_receipt(&state).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);

        let err = confirm_payment(&mut state).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[test]
    fn test_cancel_returns_to_cart() {
        let mut state = session();
        toggle_service(&mut state, "4").unwrap();
        checkout(&mut state).unwrap();

        let cart = cancel_payment(&mut state).unwrap();
        assert_eq!(cart.phase, Phase::Open);
        assert!(cart.transaction.is_service_selected("4"));
    }
}
