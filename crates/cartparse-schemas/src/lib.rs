//! Cartparse Schemas - cart CSV schema, tokenizer and validators
//!
//! This crate holds the validation engine for shopping-cart CSV documents:
//! - **Schema**: the fixed, ordered column definitions of a cart document
//! - **Tokenizer**: splits raw text into rows of trimmed cells
//! - **Validation**: header, row-shape and cell rules producing an ordered
//!   list of structured errors
//!
//! ## Quick Start
//!
//! ```rust
//! use cartparse_schemas::{create_cart_validator, DocumentValidator};
//!
//! let validator = create_cart_validator();
//!
//! let errors = validator.validate("Product name,Price,Quantity\nMollis consequat,9.00,-2");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors[0].message,
//!     "Expected cell to be a positive number but received \"-2\"."
//! );
//! ```
//!
//! ## Rules
//!
//! - Header cells must match the schema column names, position by position
//! - Every data row must have exactly as many cells as the schema has columns
//! - `Product name` must be a nonempty string
//! - `Price` and `Quantity` must be positive decimal numbers
//!
//! Validation never stops at the first problem: every violation is collected,
//! header errors first, then row by row.
//!
//! Copyright (c) 2025 Cartparse Team
//! Licensed under the Apache-2.0 license

pub mod schema;
pub mod tokenizer;
pub mod validation;

// Re-export commonly used types for convenience
pub use schema::{ColumnDefinition, ColumnKind, Schema, CART_SCHEMA};
pub use tokenizer::{Row, Tokenizer, DEFAULT_DELIMITER};
pub use validation::{
    create_cart_validator, CartValidator, DocumentValidator, ErrorKind, ValidationConfig,
    ValidationError, ValidationErrors, ValidationHelpers,
};
