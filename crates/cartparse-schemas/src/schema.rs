//! Cart document schema
//!
//! The schema is a fixed, ordered list of column definitions. Position matters:
//! header cell `i` must carry the name of column `i`, and data cell `i` is
//! checked against the kind of column `i`.
//!
//! Copyright (c) 2025 Cartparse Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use std::fmt;

/// Value rule applied to every data cell of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    /// Any string that is not empty after trimming
    StringNonempty,
    /// A locale-free decimal number strictly greater than zero
    PositiveNumber,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::StringNonempty => write!(f, "string-nonempty"),
            ColumnKind::PositiveNumber => write!(f, "positive-number"),
        }
    }
}

/// A single named column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    /// Expected header text
    pub name: &'static str,
    /// Rule for the data cells below the header
    pub kind: ColumnKind,
}

/// Ordered, immutable set of column definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: &'static [ColumnDefinition],
}

impl Schema {
    /// Build a schema over a static column list
    pub const fn new(columns: &'static [ColumnDefinition]) -> Self {
        Self { columns }
    }

    /// Columns in header order
    pub fn columns(&self) -> &'static [ColumnDefinition] {
        self.columns
    }

    /// Number of cells every row must have
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the schema defines no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column definition at `index`, if any
    pub fn column(&self, index: usize) -> Option<&'static ColumnDefinition> {
        self.columns.get(index)
    }

    /// Header names in order
    pub fn header_names(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|column| column.name)
    }
}

const CART_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition {
        name: "Product name",
        kind: ColumnKind::StringNonempty,
    },
    ColumnDefinition {
        name: "Price",
        kind: ColumnKind::PositiveNumber,
    },
    ColumnDefinition {
        name: "Quantity",
        kind: ColumnKind::PositiveNumber,
    },
];

/// The shopping-cart schema: `Product name`, `Price`, `Quantity`
pub static CART_SCHEMA: Schema = Schema::new(CART_COLUMNS);

/// Index of the product name column in [`CART_SCHEMA`]
pub const NAME_COLUMN: usize = 0;
/// Index of the price column in [`CART_SCHEMA`]
pub const PRICE_COLUMN: usize = 1;
/// Index of the quantity column in [`CART_SCHEMA`]
pub const QUANTITY_COLUMN: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_schema_layout() {
        assert_eq!(CART_SCHEMA.len(), 3);
        let names: Vec<_> = CART_SCHEMA.header_names().collect();
        assert_eq!(names, vec!["Product name", "Price", "Quantity"]);

        assert_eq!(CART_SCHEMA.column(NAME_COLUMN).unwrap().kind, ColumnKind::StringNonempty);
        assert_eq!(CART_SCHEMA.column(PRICE_COLUMN).unwrap().kind, ColumnKind::PositiveNumber);
        assert_eq!(CART_SCHEMA.column(QUANTITY_COLUMN).unwrap().kind, ColumnKind::PositiveNumber);
        assert!(CART_SCHEMA.column(3).is_none());
    }

    #[test]
    fn test_column_kind_display() {
        assert_eq!(ColumnKind::StringNonempty.to_string(), "string-nonempty");
        assert_eq!(ColumnKind::PositiveNumber.to_string(), "positive-number");
    }
}
