//! Cartparse Core - turns validated cart CSV documents into cart items
//!
//! This crate sits on top of `cartparse-schemas` and provides the parsing
//! pipeline for shopping-cart documents.
//!
//! # Main Components
//!
//! - **Parser**: read a document, validate it, then build [`CartItem`]s
//! - **Totals**: sum `price * quantity` over anything [`Priced`]
//! - **Identifiers**: pluggable [`IdGenerator`]s for item ids
//! - **Consistency**: check a serialized cart document, alone or against a
//!   freshly parsed cart
//!
//! # Example
//!
//! ```
//! use cartparse_core::{CartParser, Result};
//!
//! fn example() -> Result<()> {
//!     let cart = CartParser::new()
//!         .parse_str("Product name,Price,Quantity\nMollis consequat,9.00,2")?;
//!     assert_eq!(cart.items.len(), 1);
//!     assert_eq!(cart.total, 18.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Copyright (c) 2025 Cartparse Team
//! Licensed under the Apache-2.0 license

pub mod consistency;
pub mod error;
pub mod ids;
pub mod parser;
pub mod total;
pub mod types;

// Re-export main types for convenience
pub use consistency::{
    check_document, compare_with_cart, CartDocument, ConsistencyIssue, ConsistencyReport,
    DocumentItem, ItemField, DEFAULT_TOLERANCE,
};
pub use error::{Error, Result};
pub use ids::{is_uuid_v4, IdGenerator, RandomIds, SequentialIds};
pub use parser::CartParser;
pub use total::{amounts_match, calc_total, Priced};
pub use types::{CartItem, ParsedCart};

// Validation types callers need alongside the parser
pub use cartparse_schemas::{ValidationConfig, ValidationError, ValidationErrors};
