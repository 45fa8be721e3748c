//! End-to-end tests for the cart parsing pipeline
//!
//! These tests run the parser against the sample documents shipped in
//! `samples/` and against documents written to temporary files.

use cartparse_core::{
    amounts_match, check_document, compare_with_cart, is_uuid_v4, CartDocument, CartParser,
    Error, ParsedCart, SequentialIds, DEFAULT_TOLERANCE,
};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_CSV: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../samples/cart.csv");
const SAMPLE_JSON: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../samples/cart.json");

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_parse_sample_cart() {
    let cart = CartParser::new()
        .parse(SAMPLE_CSV)
        .expect("Sample cart should parse");

    let rows: Vec<_> = cart
        .items
        .iter()
        .map(|item| (item.name.as_str(), item.price, item.quantity))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Mollis consequat", 9.0, 2.0),
            ("Tvoluptatem", 10.32, 1.0),
            ("Scelerisque lacinia", 18.9, 1.0),
        ]
    );
    assert!(amounts_match(cart.total, 47.22, 1e-2));
    assert!(cart.items.iter().all(|item| is_uuid_v4(&item.id.to_string())));
}

#[test]
fn test_sample_document_matches_parsed_cart() {
    let cart = CartParser::new().parse(SAMPLE_CSV).unwrap();
    let document = CartDocument::from_file(SAMPLE_JSON).expect("Sample JSON should load");

    let report = check_document(&document, DEFAULT_TOLERANCE);
    assert!(report.is_consistent(), "{}", report);

    let report = compare_with_cart(&document, &cart, DEFAULT_TOLERANCE);
    assert!(report.is_consistent(), "{}", report);
}

#[test]
fn test_parsed_cart_round_trips_through_json() {
    let parser = CartParser::new().with_id_generator(SequentialIds::default());
    let cart = parser.parse(SAMPLE_CSV).unwrap();

    let json = serde_json::to_string_pretty(&cart).unwrap();
    let back: ParsedCart = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cart);

    let document = CartDocument::from_json_str(&json).unwrap();
    assert!(check_document(&document, DEFAULT_TOLERANCE).is_consistent());
}

#[test]
fn test_invalid_file_reports_every_error() {
    let file = write_temp(
        "Product name,Price,Quantity\n\
         Mollis consequat,9.00,2\n\
         ,10.32,1\n\
         Scelerisque lacinia,-18.90,0\n\
         Tvoluptatem,1\n",
    );

    let err = CartParser::new().parse(file.path()).unwrap_err();
    let errors = err.validation_errors().expect("Expected validation errors");
    let located: Vec<_> = errors.iter().map(|e| (e.row, e.column)).collect();
    assert_eq!(
        located,
        vec![(2, Some(0)), (3, Some(1)), (3, Some(2)), (4, None)]
    );
    assert_eq!(err.to_string(), "Cart validation failed with 4 error(s)");
}

#[test]
fn test_crlf_file_with_trailing_newlines() {
    let file = write_temp("Product name,Price,Quantity\r\nMollis consequat,9.00,2\r\n\r\n");
    let cart = CartParser::new().parse(file.path()).unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].name, "Mollis consequat");
}

#[test]
fn test_blank_lines_between_rows_are_skipped() {
    let file = write_temp("Product name,Price,Quantity\n\nMollis consequat,9.00,2\n   \nTvoluptatem,10.32,1\n");
    let cart = CartParser::new().parse(file.path()).unwrap();
    assert_eq!(cart.items.len(), 2);
    assert!(amounts_match(cart.total, 28.32, DEFAULT_TOLERANCE));
}

#[test]
fn test_quoted_delimiter_is_not_special() {
    let file = write_temp("Product name,Price,Quantity\nA,\"1,5\",1\n");
    let err = CartParser::new().parse(file.path()).unwrap_err();

    match err {
        Error::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.errors[0].message,
                "Expected row to have 3 cells but received 4."
            );
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("cart.csv");

    let err = CartParser::new().parse(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if path == &missing));
}
