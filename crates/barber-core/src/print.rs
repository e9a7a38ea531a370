//! # Print Bridge
//!
//! Wire format for the external Bluetooth thermal-printer app.
//!
//! The register never talks to a printer. It opens a deep link; the printer
//! app follows the `id` back to the register and fetches the receipt as a
//! JSON array of numeric-coded items:
//!
//! ```text
//! my.bluetoothprint.scheme://http://localhost:3000/api/print-receipt?id=1760612345678
//!                            └──────── origin ───┘
//!
//! [{"type":0,"content":"BARBERSHOP POS","bold":1,"align":1,"format":2}, ...]
//! ```
//!
//! | field  | codes                                   |
//! |--------|-----------------------------------------|
//! | type   | 0 text                                  |
//! | bold   | 0 off, 1 on                             |
//! | align  | 0 left, 1 center, 2 right               |
//! | format | 0 normal, 1 large, 2 double size        |

use serde::{Deserialize, Serialize};

use crate::receipt::{Alignment, LineKind, Receipt, ReceiptLine, TextFormat};

/// URI scheme registered by the printer app.
pub const PRINT_SCHEME: &str = "my.bluetoothprint.scheme";

/// Path the printer app fetches receipt JSON from.
pub const PRINT_PATH: &str = "/api/print-receipt";

impl LineKind {
    pub fn code(&self) -> u8 {
        match self {
            LineKind::Text => 0,
        }
    }
}

impl Alignment {
    pub fn code(&self) -> u8 {
        match self {
            Alignment::Left => 0,
            Alignment::Center => 1,
            Alignment::Right => 2,
        }
    }
}

impl TextFormat {
    pub fn code(&self) -> u8 {
        match self {
            TextFormat::Normal => 0,
            TextFormat::Large => 1,
            TextFormat::DoubleSize => 2,
        }
    }
}

/// One receipt line as the printer app expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintItem {
    #[serde(rename = "type")]
    pub item_type: u8,
    pub content: String,
    pub bold: u8,
    pub align: u8,
    pub format: u8,
}

impl From<&ReceiptLine> for PrintItem {
    fn from(line: &ReceiptLine) -> Self {
        PrintItem {
            item_type: line.kind.code(),
            content: line.content.clone(),
            bold: u8::from(line.emphasis),
            align: line.alignment.code(),
            format: line.format.code(),
        }
    }
}

/// Deep link that hands job `job_id` to the printer app.
///
/// A trailing `/` on `origin` is dropped so the path never doubles up.
pub fn print_uri(origin: &str, job_id: i64) -> String {
    format!(
        "{}://{}{}?id={}",
        PRINT_SCHEME,
        origin.trim_end_matches('/'),
        PRINT_PATH,
        job_id
    )
}

/// A receipt ready for hand-off: the link to open and the payload the
/// printer app will fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJob {
    pub uri: String,
    pub items: Vec<PrintItem>,
}

impl PrintJob {
    /// `job_id` is the epoch-millisecond stamp the link carries.
    pub fn for_receipt(receipt: &Receipt, origin: &str, job_id: i64) -> Self {
        PrintJob {
            uri: print_uri(origin, job_id),
            items: receipt.lines.iter().map(PrintItem::from).collect(),
        }
    }

    /// The body served at the print path.
    pub fn payload_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Transaction;
    use crate::catalog::{Catalog, InMemoryCatalog};
    use crate::receipt::{ReceiptBuilder, ShopProfile};
    use chrono::NaiveDate;

    fn receipt() -> Receipt {
        let catalog = InMemoryCatalog::sample();
        let shop = ShopProfile::default();
        let mut tx = Transaction::new();
        tx.toggle_service(catalog.service("1").unwrap());

        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        ReceiptBuilder::new(&shop).build(&tx, at)
    }

    #[test]
    fn test_print_uri() {
        assert_eq!(
            print_uri("http://localhost:3000", 1_760_612_345_678),
            "my.bluetoothprint.scheme://http://localhost:3000/api/print-receipt?id=1760612345678"
        );
    }

    #[test]
    fn test_print_uri_trims_trailing_slash() {
        assert_eq!(
            print_uri("https://pos.example.id/", 7),
            "my.bluetoothprint.scheme://https://pos.example.id/api/print-receipt?id=7"
        );
    }

    #[test]
    fn test_item_codes() {
        let title = ReceiptLine::text("BARBERSHOP POS")
            .bold()
            .centered()
            .sized(TextFormat::DoubleSize);
        let item = PrintItem::from(&title);
        assert_eq!((item.item_type, item.bold, item.align, item.format), (0, 1, 1, 2));

        let total = ReceiptLine::text("TOTAL: Rp 82.500")
            .bold()
            .right()
            .sized(TextFormat::Large);
        let item = PrintItem::from(&total);
        assert_eq!((item.bold, item.align, item.format), (1, 2, 1));

        let plain = PrintItem::from(&ReceiptLine::text("Payment: cash"));
        assert_eq!((plain.bold, plain.align, plain.format), (0, 0, 0));
    }

    #[test]
    fn test_item_json_field_names() {
        let item = PrintItem::from(&ReceiptLine::text("SERVICES").bold());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": 0, "content": "SERVICES", "bold": 1, "align": 0, "format": 0})
        );
    }

    #[test]
    fn test_job_preserves_line_order() {
        let receipt = receipt();
        let job = PrintJob::for_receipt(&receipt, "http://localhost:3000", 42);

        assert_eq!(job.items.len(), receipt.lines.len());
        assert_eq!(job.items[0].content, "BARBERSHOP POS");
        assert_eq!(job.items.last().unwrap().content, "Please come again");
        assert!(job.uri.ends_with("?id=42"));

        let payload = job.payload_json().unwrap();
        assert!(payload.starts_with("[{\"type\":0,\"content\":\"BARBERSHOP POS\""));
    }
}
