//! # Cart Commands
//!
//! Commands that edit the open transaction.
//!
//! ## Cart Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Services                          Products                             │
//! │  [x] Regular Haircut   Rp 75.000   Premium Pomade   [-] 2 [+]   [x]    │
//! │  [ ] Beard Trim        Rp 50.000   Beard Oil        [Add to Cart]      │
//! │        │                                 │     │           │            │
//! │   toggle_service                add_product  update_product_quantity    │
//! │                                                                         │
//! │  Customer: [Ahmad Rizky] [+62 812-...]   ──► set_customer               │
//! │  Payment:  (cash) (qris) (transfer)      ──► set_payment_method         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the whole cart so the client can redraw from
//! one payload.

use barber_core::validation::{
    validate_catalog_id, validate_customer_name, validate_customer_phone,
    validate_payment_method, validate_quantity,
};
use barber_core::{CoreError, PaymentMethod, Totals, Transaction, MAX_ITEM_QUANTITY};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{Phase, RegisterState};

/// Cart response: the transaction, its totals and the session phase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub phase: Phase,
    pub transaction: Transaction,
    pub totals: Totals,
    pub is_empty: bool,
}

impl From<&RegisterState> for CartResponse {
    fn from(state: &RegisterState) -> Self {
        let tx = state.transaction();
        CartResponse {
            phase: state.phase(),
            transaction: tx.clone(),
            totals: tx.totals(),
            is_empty: tx.is_empty(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(state: &RegisterState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(state)
}

/// Selects a service, or deselects it if already selected.
pub fn toggle_service(state: &mut RegisterState, service_id: &str) -> Result<CartResponse, ApiError> {
    debug!(service_id = %service_id, "toggle_service command");

    let service_id = validate_catalog_id("service id", service_id)?;
    let (catalog, tx) = state.edit("toggle a service")?;
    let service = catalog.require_service(&service_id)?;

    let selected = tx.toggle_service(service);
    debug!(service_id = %service_id, selected, "Service toggled");

    Ok(CartResponse::from(&*state))
}

/// Adds one unit of a product.
///
/// ## Behavior
/// - Product already in cart: quantity + 1
/// - Product not in cart: new line with quantity 1
/// - Line already at the ceiling: rejected, cart unchanged
pub fn add_product(state: &mut RegisterState, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_product command");

    let product_id = validate_catalog_id("product id", product_id)?;
    let (catalog, tx) = state.edit("add a product")?;
    let product = catalog.require_product(&product_id)?;

    let requested = i64::from(tx.product_quantity(&product_id)) + 1;
    if requested > MAX_ITEM_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested,
            max: MAX_ITEM_QUANTITY,
        }
        .into());
    }

    tx.add_product(product);
    Ok(CartResponse::from(&*state))
}

/// Sets a product line's quantity.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Quantity > 999: rejected
/// - Product known but not in the cart: nothing changes
pub fn update_product_quantity(
    state: &mut RegisterState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_product_quantity command");

    let product_id = validate_catalog_id("product id", product_id)?;
    validate_quantity(quantity)?;

    let (catalog, tx) = state.edit("change a quantity")?;
    catalog.require_product(&product_id)?;

    tx.set_product_quantity(&product_id, quantity);
    Ok(CartResponse::from(&*state))
}

/// Records the customer's name and phone. Either may be empty.
pub fn set_customer(
    state: &mut RegisterState,
    name: &str,
    phone: &str,
) -> Result<CartResponse, ApiError> {
    debug!("set_customer command");

    let name = validate_customer_name(name)?;
    let phone = validate_customer_phone(phone)?;

    let (_, tx) = state.edit("set the customer")?;
    tx.set_customer(name, phone);

    Ok(CartResponse::from(&*state))
}

/// Chooses how the customer pays. Allowed on the cart screen and in the
/// payment dialog.
pub fn set_payment_method(state: &mut RegisterState, method: &str) -> Result<CartResponse, ApiError> {
    debug!(method = %method, "set_payment_method command");

    let method = PaymentMethod::from(validate_payment_method(method)?);
    state.edit_payment("set the payment method")?.set_payment_method(method);

    Ok(CartResponse::from(&*state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;
    use barber_core::InMemoryCatalog;

    fn session() -> RegisterState {
        RegisterState::new(ConfigState::default(), InMemoryCatalog::sample())
    }

    #[test]
    fn test_toggle_service() {
        let mut state = session();

        let cart = toggle_service(&mut state, "1").unwrap();
        assert!(cart.transaction.is_service_selected("1"));
        assert_eq!(cart.totals.total.rupiah(), 82_500);

        let cart = toggle_service(&mut state, "1").unwrap();
        assert!(cart.is_empty);
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let mut state = session();

        let err = toggle_service(&mut state, "99").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Service not found: 99");

        let err = add_product(&mut state, "p9").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = update_product_quantity(&mut state, "p9", 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_blank_id_is_validation_error() {
        let mut state = session();
        let err = add_product(&mut state, "  ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_add_and_update_product() {
        let mut state = session();

        add_product(&mut state, "p1").unwrap();
        let cart = add_product(&mut state, "p1").unwrap();
        assert_eq!(cart.transaction.product_quantity("p1"), 2);
        assert_eq!(cart.totals.subtotal.rupiah(), 170_000);

        let cart = update_product_quantity(&mut state, "p1", 5).unwrap();
        assert_eq!(cart.transaction.product_quantity("p1"), 5);

        let cart = update_product_quantity(&mut state, "p1", 0).unwrap();
        assert!(cart.is_empty);
    }

    #[test]
    fn test_update_missing_line_is_no_op() {
        let mut state = session();
        let cart = update_product_quantity(&mut state, "p2", 3).unwrap();
        assert!(cart.is_empty);
    }

    #[test]
    fn test_quantity_ceiling() {
        let mut state = session();
        add_product(&mut state, "p1").unwrap();

        let err = update_product_quantity(&mut state, "p1", 1000).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.transaction().product_quantity("p1"), 1);

        update_product_quantity(&mut state, "p1", 999).unwrap();
        let err = add_product(&mut state, "p1").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Quantity 1000 exceeds maximum allowed (999)");
        assert_eq!(state.transaction().product_quantity("p1"), 999);
    }

    #[test]
    fn test_set_customer_trims_and_validates() {
        let mut state = session();

        let cart = set_customer(&mut state, "  Ahmad Rizky ", "+62 812-3456-7890").unwrap();
        assert_eq!(cart.transaction.customer_name, "Ahmad Rizky");
        assert_eq!(cart.transaction.customer_phone, "+62 812-3456-7890");

        let err = set_customer(&mut state, "Ahmad", "not a phone").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.transaction().customer_name, "Ahmad Rizky");
    }

    #[test]
    fn test_set_payment_method() {
        let mut state = session();

        let cart = set_payment_method(&mut state, "transfer").unwrap();
        assert_eq!(cart.transaction.payment_method, PaymentMethod::BankTransfer);

        let err = set_payment_method(&mut state, " ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_cart_locked_while_awaiting_payment() {
        let mut state = session();
        toggle_service(&mut state, "1").unwrap();
        state.begin_payment().unwrap();

        let err = add_product(&mut state, "p1").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);

        let cart = set_payment_method(&mut state, "qris").unwrap();
        assert_eq!(cart.phase, Phase::AwaitingPayment);
        assert_eq!(cart.transaction.payment_method, PaymentMethod::Qris);
    }
}
