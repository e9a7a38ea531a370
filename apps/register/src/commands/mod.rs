//! # Register Commands
//!
//! Every command the register accepts on its input stream.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (decoding, dispatch, response envelope)
//! ├── catalog.rs   ◄─── Service/product listing
//! ├── cart.rs      ◄─── Cart manipulation, customer, payment method
//! └── checkout.rs  ◄─── Checkout, payment, receipt, print, completion
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin line                                                             │
//! │  {"command":"update_product_quantity","productId":"p1","quantity":2}    │
//! │         │                                                               │
//! │         │ serde (tag = "command")                                       │
//! │         ▼                                                               │
//! │  Command::UpdateProductQuantity { product_id, quantity }                │
//! │         │                                                               │
//! │         │ dispatch()                                                    │
//! │         ▼                                                               │
//! │  cart::update_product_quantity(&mut RegisterState, ..)                  │
//! │      -> Result<CartResponse, ApiError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout line                                                            │
//! │  {"ok":true,"data":{...}}  or  {"ok":false,"error":{"code","message"}}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::RegisterState;

/// A decoded command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Command {
    GetCatalog {
        #[serde(default)]
        query: Option<String>,
    },
    GetCart,
    ToggleService {
        service_id: String,
    },
    AddProduct {
        product_id: String,
    },
    UpdateProductQuantity {
        product_id: String,
        quantity: i64,
    },
    SetCustomer {
        #[serde(default)]
        name: String,
        #[serde(default)]
        phone: String,
    },
    SetPaymentMethod {
        method: String,
    },
    Checkout,
    CancelPayment,
    ConfirmPayment,
    PrintReceipt,
    CompleteTransaction,
}

impl Command {
    /// Wire name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetCatalog { .. } => "get_catalog",
            Command::GetCart => "get_cart",
            Command::ToggleService { .. } => "toggle_service",
            Command::AddProduct { .. } => "add_product",
            Command::UpdateProductQuantity { .. } => "update_product_quantity",
            Command::SetCustomer { .. } => "set_customer",
            Command::SetPaymentMethod { .. } => "set_payment_method",
            Command::Checkout => "checkout",
            Command::CancelPayment => "cancel_payment",
            Command::ConfirmPayment => "confirm_payment",
            Command::PrintReceipt => "print_receipt",
            Command::CompleteTransaction => "complete_transaction",
        }
    }
}

/// One response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Response {
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Response::success(data),
            Err(error) => Response::failure(error),
        }
    }
}

/// Decodes and runs one input line.
pub fn handle_line(state: &mut RegisterState, line: &str) -> Response {
    let command = match serde_json::from_str::<Command>(line) {
        Ok(command) => command,
        Err(e) => {
            warn!(error = %e, "Rejected undecodable command line");
            return Response::failure(ApiError::from(e));
        }
    };

    Response::from(dispatch(state, command))
}

/// Runs a decoded command against the session.
pub fn dispatch(state: &mut RegisterState, command: Command) -> Result<Value, ApiError> {
    let name = command.name();

    let result = match command {
        Command::GetCatalog { query } => to_data(catalog::get_catalog(state, query.as_deref())),
        Command::GetCart => to_data(Ok(cart::get_cart(state))),
        Command::ToggleService { service_id } => to_data(cart::toggle_service(state, &service_id)),
        Command::AddProduct { product_id } => to_data(cart::add_product(state, &product_id)),
        Command::UpdateProductQuantity {
            product_id,
            quantity,
        } => to_data(cart::update_product_quantity(state, &product_id, quantity)),
        Command::SetCustomer { name, phone } => to_data(cart::set_customer(state, &name, &phone)),
        Command::SetPaymentMethod { method } => to_data(cart::set_payment_method(state, &method)),
        Command::Checkout => to_data(checkout::checkout(state)),
        Command::CancelPayment => to_data(checkout::cancel_payment(state)),
        Command::ConfirmPayment => to_data(checkout::confirm_payment(state)),
        Command::PrintReceipt => to_data(checkout::print_receipt(state)),
        Command::CompleteTransaction => to_data(checkout::complete_transaction(state)),
    };

    if let Err(ref e) = result {
        debug!(command = name, code = ?e.code, message = %e.message, "Command failed");
    }

    result
}

fn to_data<T: Serialize>(result: Result<T, ApiError>) -> Result<Value, ApiError> {
    let data = result?;
    serde_json::to_value(data)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
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
    fn test_decode_commands() {
        let cmd: Command =
            serde_json::from_str(r#"{"command":"update_product_quantity","productId":"p1","quantity":3}"#)
                .unwrap();
        assert_eq!(
            cmd,
            Command::UpdateProductQuantity {
                product_id: "p1".to_string(),
                quantity: 3
            }
        );

        let cmd: Command = serde_json::from_str(r#"{"command":"checkout"}"#).unwrap();
        assert_eq!(cmd, Command::Checkout);

        let cmd: Command = serde_json::from_str(r#"{"command":"get_catalog"}"#).unwrap();
        assert_eq!(cmd, Command::GetCatalog { query: None });

        let cmd: Command =
            serde_json::from_str(r#"{"command":"set_customer","name":"Ahmad Rizky"}"#).unwrap();
        assert_eq!(
            cmd,
            Command::SetCustomer {
                name: "Ahmad Rizky".to_string(),
                phone: String::new()
            }
        );
    }

    #[test]
    fn test_unknown_command_is_bad_request() {
        let mut state = session();
        let response = handle_line(&mut state, r#"{"command":"refund"}"#);

        assert!(!response.ok);
        assert_eq!(response.error.unwrap().code, ErrorCode::BadRequest);
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let mut state = session();
        let response = handle_line(&mut state, "{not json");

        assert!(!response.ok);
        assert!(response.data.is_none());
        assert_eq!(response.error.unwrap().code, ErrorCode::BadRequest);
    }

    #[test]
    fn test_success_envelope() {
        let mut state = session();
        let response = handle_line(&mut state, r#"{"command":"toggle_service","serviceId":"1"}"#);

        assert!(response.ok);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ok"], true);
        assert!(json.get("error").is_none());
        assert_eq!(json["data"]["totals"]["total"], 82_500);
    }
}
