//! Core types for parsed carts
//!
//! The serialized form of [`ParsedCart`] is the JSON document contract
//! consumed downstream: `{ "items": [{ "id", "name", "price", "quantity" }], "total" }`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Random (version 4) identifier assigned at parse time
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Unit price, always > 0
    pub price: f64,
    /// Number of units, always > 0
    pub quantity: f64,
}

impl CartItem {
    /// Price times quantity for this line
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity
    }
}

/// Result of parsing a valid cart document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCart {
    /// Items in document order
    pub items: Vec<CartItem>,
    /// Sum of `price * quantity` over all items
    pub total: f64,
}

impl ParsedCart {
    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for a header-only document
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
