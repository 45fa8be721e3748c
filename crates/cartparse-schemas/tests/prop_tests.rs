//! Property-based tests for the tokenizer and validator
//!
//! These tests verify ordering and shape invariants across a wide range of
//! generated documents.

use cartparse_schemas::{create_cart_validator, DocumentValidator, ErrorKind, Tokenizer};
use proptest::prelude::*;

const HEADER: &str = "Product name,Price,Quantity";

/// Strategy for a well-formed data row
fn valid_row_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]",
        1u32..100_000,
        1u32..1_000,
    )
        .prop_map(|(name, cents, quantity)| {
            format!("{},{}.{:02},{}", name, cents / 100 + 1, cents % 100, quantity)
        })
}

/// Strategy for arbitrary, mostly malformed rows
fn any_row_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Za-z0-9 .+-]{0,8}", 0..6).prop_map(|cells| cells.join(","))
}

proptest! {
    #[test]
    fn prop_well_formed_documents_are_valid(rows in proptest::collection::vec(valid_row_strategy(), 0..20)) {
        let text = std::iter::once(HEADER.to_string()).chain(rows).collect::<Vec<_>>().join("\n");
        prop_assert!(create_cart_validator().validate(&text).is_empty());
    }

    #[test]
    fn prop_validation_is_deterministic(rows in proptest::collection::vec(any_row_strategy(), 0..10)) {
        let text = rows.join("\n");
        let validator = create_cart_validator();
        prop_assert_eq!(validator.validate(&text), validator.validate(&text));
    }

    #[test]
    fn prop_errors_are_ordered(rows in proptest::collection::vec(any_row_strategy(), 0..10)) {
        let text = std::iter::once(HEADER.to_string()).chain(rows).collect::<Vec<_>>().join("\n");
        let errors = create_cart_validator().validate(&text);

        for pair in errors.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.row <= b.row);
            if a.row == b.row {
                // row error never follows a cell error, and never shares a row with one
                prop_assert!(a.kind == b.kind);
                prop_assert!(a.column < b.column);
            }
        }
    }

    #[test]
    fn prop_row_errors_exclude_cell_errors(rows in proptest::collection::vec(any_row_strategy(), 0..10)) {
        let text = std::iter::once(HEADER.to_string()).chain(rows).collect::<Vec<_>>().join("\n");
        let errors = create_cart_validator().validate(&text);

        for row_error in errors.iter().filter(|e| e.kind == ErrorKind::Row) {
            prop_assert!(row_error.column.is_none());
            prop_assert!(!errors.iter().any(|e| e.kind == ErrorKind::Cell && e.row == row_error.row));
        }
    }

    #[test]
    fn prop_tokenized_cells_are_trimmed(text in "[a-z ,\n]{0,80}") {
        for row in Tokenizer::new().tokenize(&text) {
            for cell in row {
                prop_assert_eq!(cell.trim(), cell.as_str());
            }
        }
    }
}
