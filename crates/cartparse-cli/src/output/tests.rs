// Tests for output formatting
//
// These tests check the human renderings of carts, validation errors and
// consistency reports, and that machine formats stay free of status lines.

use super::*;
use cartparse_core::{CartItem, ConsistencyIssue, ItemField};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// A writer whose contents can be read back after the `OutputWriter` owns it
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn writer(format: OutputFormat) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, false, 0, Box::new(buffer.clone()));
    (writer, buffer)
}

fn sample_cart() -> ParsedCart {
    ParsedCart {
        items: vec![
            CartItem {
                id: Uuid::parse_str("3e6def17-5e87-4f27-b6b8-ae78948523a9").unwrap(),
                name: "Mollis consequat".to_string(),
                price: 9.0,
                quantity: 2.0,
            },
            CartItem {
                id: Uuid::parse_str("90cd22aa-8bcf-4510-a18d-ec14656d1f6a").unwrap(),
                name: "Tvoluptatem".to_string(),
                price: 10.32,
                quantity: 1.0,
            },
        ],
        total: 28.32,
    }
}

#[test]
fn test_cart_formatting_human() {
    let formatted = format_cart_human(&sample_cart());

    assert!(formatted.starts_with("🛒 Cart - 2 Item(s)"));
    assert!(formatted.contains("Mollis consequat │ 9.00  │ 2"));
    assert!(formatted.contains("3e6def17-5e87-4f27-b6b8-ae78948523a9"));
    assert!(formatted.contains("💰 Total: 28.32"));
}

#[test]
fn test_empty_cart_formatting_human() {
    let cart = ParsedCart {
        items: vec![],
        total: 0.0,
    };
    let formatted = format_cart_human(&cart);
    assert_eq!(formatted, "🛒 Cart - 0 Item(s)\n\n💰 Total: 0.00\n");
}

#[test]
fn test_validation_errors_formatting_human() {
    let errors = vec![
        ValidationError::header(1, "Price", Some("Cost")),
        ValidationError::row_shape(2, 3, 2),
    ];

    let formatted = format_validation_errors_human(&errors);
    assert!(formatted.starts_with("❌ Validation Failed - 2 Error(s)"));
    assert!(formatted.contains(&format!("1. {}", errors[0])));
    assert!(formatted.contains(&format!("2. {}", errors[1])));

    assert_eq!(format_validation_errors_human(&[]), "✅ No validation errors\n");
}

#[test]
fn test_validation_errors_json_contract() {
    let errors = vec![ValidationError::row_shape(2, 3, 2)];
    let formatted = OutputFormat::Json.format_validation_errors(&errors).unwrap();
    let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();

    assert_eq!(value[0]["type"], "row");
    assert_eq!(value[0]["row"], 2);
    assert_eq!(value[0]["column"], -1);
}

#[test]
fn test_consistency_report_formatting_human() {
    let report = ConsistencyReport {
        issues: vec![
            ConsistencyIssue::MissingField {
                item: 0,
                field: ItemField::Name,
            },
            ConsistencyIssue::MissingTotal,
        ],
    };

    let formatted = format_consistency_report_human(&report);
    assert!(formatted.starts_with("🔍 Consistency Report - 2 Issue(s)"));
    assert!(formatted.contains("1. item 0 has no name"));
    assert!(formatted.contains("2. document has no total"));

    let consistent = format_consistency_report_human(&ConsistencyReport::default());
    assert_eq!(consistent, "✅ Cart document is consistent\n");
}

#[test]
fn test_render_table_alignment() {
    let lines = render_table(
        &["Name", "Qty"],
        &[
            vec!["Tvoluptatem".to_string(), "1".to_string()],
            vec!["a".to_string(), "12345".to_string()],
        ],
    );

    assert_eq!(lines[0], "Name        │ Qty");
    assert_eq!(lines[1], "────────────┼──────");
    assert_eq!(lines[2], "Tvoluptatem │ 1");
    assert_eq!(lines[3], "a           │ 12345");
}

#[test]
fn test_status_messages_only_in_human_mode() {
    let (mut human, buffer) = writer(OutputFormat::Human);
    human.info("Reading cart").unwrap();
    human.success("✓ done").unwrap();
    human.error("✗ failed").unwrap();
    assert_eq!(buffer.contents(), "INFO: Reading cart\n✓ done\nERROR: ✗ failed\n");

    let (mut json, buffer) = writer(OutputFormat::Json);
    json.info("Reading cart").unwrap();
    json.success("✓ done").unwrap();
    json.section("Details").unwrap();
    json.cart(&sample_cart()).unwrap();

    let contents = buffer.contents();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["total"], 28.32);
    assert_eq!(value["items"][1]["name"], "Tvoluptatem");
}

#[test]
fn test_quiet_suppresses_info_but_not_errors() {
    let buffer = SharedBuffer::default();
    let mut output =
        OutputWriter::with_writer(OutputFormat::Human, false, true, 0, Box::new(buffer.clone()));

    output.info("hidden").unwrap();
    output.table(&["A"], vec![vec!["x".to_string()]]).unwrap();
    output.error("shown").unwrap();
    assert_eq!(buffer.contents(), "ERROR: shown\n");
}

#[test]
fn test_yaml_data_output() {
    let (mut output, buffer) = writer(OutputFormat::Yaml);
    output
        .data(&serde_json::json!({"total": 47.22}))
        .unwrap();
    assert_eq!(buffer.contents(), "total: 47.22\n");
}

#[test]
fn test_output_writer_creation() {
    let writer = OutputWriter::new(OutputFormat::JsonPretty, true, false, 1);
    assert_eq!(writer.format(), OutputFormat::JsonPretty);
    assert_eq!(writer.verbosity(), 1);
    assert!(!writer.is_human());
}
