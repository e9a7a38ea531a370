use std::io::Cursor;

use barber_core::InMemoryCatalog;
use barber_register::serve;
use barber_register::state::{ConfigState, RegisterState};
use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;

fn clock() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 5, 9, 4, 7).unwrap()
}

fn session(config: ConfigState) -> RegisterState {
    RegisterState::new(config, InMemoryCatalog::sample()).with_clock(clock)
}

/// Feeds `commands` through the loop and returns one parsed response per
/// command.
fn run_script(state: &mut RegisterState, commands: &[&str]) -> Vec<Value> {
    let input = commands.join("\n");
    let mut output = Vec::new();

    serve(state, Cursor::new(input), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn contents(receipt: &Value) -> Vec<String> {
    receipt["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["content"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_haircut_sale_end_to_end() {
    let mut state = session(ConfigState::default());

    let responses = run_script(
        &mut state,
        &[
            r#"{"command":"toggle_service","serviceId":"1"}"#,
            r#"{"command":"checkout"}"#,
            r#"{"command":"set_payment_method","method":"qris"}"#,
            r#"{"command":"confirm_payment"}"#,
            r#"{"command":"print_receipt"}"#,
            r#"{"command":"complete_transaction"}"#,
            r#"{"command":"get_cart"}"#,
        ],
    );

    assert_eq!(responses.len(), 7);
    assert!(responses.iter().all(|r| r["ok"] == true));

    let cart = &responses[0]["data"];
    assert_eq!(cart["totals"]["subtotal"], 75_000);
    assert_eq!(cart["totals"]["tax"], 7_500);
    assert_eq!(cart["totals"]["total"], 82_500);

    assert_eq!(responses[1]["data"]["accepted"], true);
    assert_eq!(responses[1]["data"]["phase"], "awaiting_payment");

    let receipt = &responses[3]["data"];
    let text = contents(receipt);
    assert_eq!(
        text,
        vec![
            "BARBERSHOP POS",
            "Jl. Contoh No. 123, Jakarta",
            "Tel: 021-1234567",
            "Date: 5/3/2026 Time: 09.04.07",
            "--------------------------------",
            "SERVICES",
            "Regular Haircut",
            "Rp 75.000",
            "--------------------------------",
            "Subtotal: Rp 75.000",
            "Tax (10%): Rp 7.500",
            "TOTAL: Rp 82.500",
            "Payment: qris",
            " ",
            "Thank you for your visit!",
            "Please come again",
        ]
    );
    assert_eq!(receipt["lines"][0]["format"], "double-size");
    assert_eq!(receipt["lines"][0]["alignment"], "center");
    assert_eq!(receipt["lines"][0]["emphasis"], true);

    let job = &responses[4]["data"];
    assert_eq!(
        job["uri"],
        format!(
            "my.bluetoothprint.scheme://http://localhost:3000/api/print-receipt?id={}",
            clock().timestamp_millis()
        )
    );
    assert_eq!(
        job["items"][0],
        serde_json::json!({"type": 0, "content": "BARBERSHOP POS", "bold": 1, "align": 1, "format": 2})
    );

    let after = &responses[6]["data"];
    assert_eq!(after["phase"], "open");
    assert_eq!(after["isEmpty"], true);
    assert_eq!(after["transaction"]["paymentMethod"], "cash");
}

#[test]
fn test_empty_checkout_is_suppressed() {
    let mut state = session(ConfigState::default());

    let responses = run_script(
        &mut state,
        &[r#"{"command":"checkout"}"#, r#"{"command":"confirm_payment"}"#],
    );

    assert_eq!(responses[0]["ok"], true);
    assert_eq!(responses[0]["data"]["accepted"], false);
    assert_eq!(responses[0]["data"]["phase"], "open");

    assert_eq!(responses[1]["ok"], false);
    assert_eq!(responses[1]["error"]["code"], "INVALID_STATE");
}

#[test]
fn test_products_only_receipt_in_plain_style() {
    let mut config = ConfigState::default();
    config.currency_style = barber_core::CurrencyStyle::Plain;
    let mut state = session(config);

    let responses = run_script(
        &mut state,
        &[
            r#"{"command":"add_product","productId":"p1"}"#,
            r#"{"command":"update_product_quantity","productId":"p1","quantity":2}"#,
            r#"{"command":"set_customer","name":"Budi Santoso","phone":"0812 3456 7890"}"#,
            r#"{"command":"checkout"}"#,
            r#"{"command":"confirm_payment"}"#,
        ],
    );

    assert!(responses.iter().all(|r| r["ok"] == true));

    let text = contents(&responses[4]["data"]);
    let services_at = text.iter().position(|c| c == "SERVICES").unwrap();
    assert_eq!(text[services_at + 1], "No services");
    assert_eq!(text[services_at + 2], "PRODUCTS");
    assert_eq!(text[services_at + 3], "Premium Pomade x2");
    assert_eq!(text[services_at + 4], "170000");
    assert!(text.contains(&"Customer: Budi Santoso".to_string()));
    assert!(text.contains(&"TOTAL: 187000".to_string()));
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let mut state = session(ConfigState::default());

    let responses = run_script(
        &mut state,
        &[
            "not json",
            "",
            r#"{"command":"toggle_service","serviceId":"42"}"#,
            r#"{"command":"update_product_quantity","productId":"p1","quantity":1000}"#,
            r#"{"command":"print_receipt"}"#,
            r#"{"command":"get_catalog","query":"oil"}"#,
        ],
    );

    // the blank line gets no response
    assert_eq!(responses.len(), 5);

    assert_eq!(responses[0]["error"]["code"], "BAD_REQUEST");
    assert_eq!(responses[1]["error"]["code"], "NOT_FOUND");
    assert_eq!(responses[1]["error"]["message"], "Service not found: 42");
    assert_eq!(responses[2]["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(responses[3]["error"]["code"], "INVALID_STATE");

    let catalog = &responses[4]["data"];
    assert_eq!(catalog["services"].as_array().unwrap().len(), 5);
    assert_eq!(catalog["products"][0]["name"], "Beard Oil");
    assert_eq!(catalog["products"].as_array().unwrap().len(), 1);
}

#[test]
fn test_cancel_then_edit_then_pay() {
    let mut state = session(ConfigState::default());

    let responses = run_script(
        &mut state,
        &[
            r#"{"command":"toggle_service","serviceId":"2"}"#,
            r#"{"command":"checkout"}"#,
            r#"{"command":"add_product","productId":"p2"}"#,
            r#"{"command":"cancel_payment"}"#,
            r#"{"command":"add_product","productId":"p2"}"#,
            r#"{"command":"checkout"}"#,
        ],
    );

    assert_eq!(responses[2]["error"]["code"], "INVALID_STATE");
    assert_eq!(responses[3]["data"]["phase"], "open");
    assert_eq!(responses[4]["ok"], true);

    // 50000 + 65000 = 115000, tax 11500
    assert_eq!(responses[5]["data"]["totals"]["total"], 126_500);
}
