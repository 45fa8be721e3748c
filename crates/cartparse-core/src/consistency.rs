//! Consistency checks for serialized cart documents
//!
//! A cart JSON document (the serialized [`ParsedCart`]) is read through the
//! lenient [`CartDocument`] view so that missing fields become reportable
//! issues instead of deserialization failures.

use crate::error::{Error, Result};
use crate::ids::is_uuid_v4;
use crate::total::{amounts_match, calc_total, Priced};
use crate::types::ParsedCart;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Default tolerance used when comparing amounts
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Lenient view of one item of a cart document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentItem {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
}

/// Missing price or quantity counts as zero
impl Priced for DocumentItem {
    fn price(&self) -> f64 {
        self.price.unwrap_or_default()
    }

    fn quantity(&self) -> f64 {
        self.quantity.unwrap_or_default()
    }
}

/// Lenient view of a cart JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartDocument {
    pub items: Vec<DocumentItem>,
    pub total: Option<f64>,
}

impl CartDocument {
    /// Parse a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

impl From<&ParsedCart> for CartDocument {
    fn from(cart: &ParsedCart) -> Self {
        Self {
            items: cart
                .items
                .iter()
                .map(|item| DocumentItem {
                    id: Some(item.id.to_string()),
                    name: Some(item.name.clone()),
                    price: Some(item.price),
                    quantity: Some(item.quantity),
                })
                .collect(),
            total: Some(cart.total),
        }
    }
}

/// Item field named in an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Id,
    Name,
    Price,
    Quantity,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemField::Id => write!(f, "id"),
            ItemField::Name => write!(f, "name"),
            ItemField::Price => write!(f, "price"),
            ItemField::Quantity => write!(f, "quantity"),
        }
    }
}

/// A single disagreement found in a cart document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyIssue {
    /// An item lacks a field
    MissingField { item: usize, field: ItemField },
    /// An item id is not a version 4 UUID
    InvalidId { item: usize, id: String },
    /// Price or quantity is zero or negative
    NonPositive {
        item: usize,
        field: ItemField,
        value: f64,
    },
    /// The document declares no total
    MissingTotal,
    /// Declared and computed totals differ
    TotalMismatch { declared: f64, computed: f64 },
    /// The document and the reference cart have different item counts
    ItemCountMismatch { expected: usize, actual: usize },
    /// An item differs from the reference cart item at the same position
    ItemMismatch {
        item: usize,
        field: ItemField,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::MissingField { item, field } => {
                write!(f, "item {} has no {}", item, field)
            }
            ConsistencyIssue::InvalidId { item, id } => {
                write!(f, "item {} id {:?} is not a version 4 UUID", item, id)
            }
            ConsistencyIssue::NonPositive { item, field, value } => {
                write!(f, "item {} {} must be positive but is {}", item, field, value)
            }
            ConsistencyIssue::MissingTotal => write!(f, "document has no total"),
            ConsistencyIssue::TotalMismatch { declared, computed } => write!(
                f,
                "declared total {} does not match computed total {}",
                declared, computed
            ),
            ConsistencyIssue::ItemCountMismatch { expected, actual } => write!(
                f,
                "expected {} item(s) but document has {}",
                expected, actual
            ),
            ConsistencyIssue::ItemMismatch {
                item,
                field,
                expected,
                actual,
            } => write!(
                f,
                "item {} {} differs: expected {} but found {}",
                item, field, expected, actual
            ),
        }
    }
}

/// Outcome of a consistency check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Issues in item order, document-level issues last
    pub issues: Vec<ConsistencyIssue>,
}

impl ConsistencyReport {
    /// True when no issue was found
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of issues
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True when no issue was found
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Iterate issues
    pub fn iter(&self) -> std::slice::Iter<'_, ConsistencyIssue> {
        self.issues.iter()
    }

    fn push(&mut self, issue: ConsistencyIssue) {
        self.issues.push(issue);
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_consistent() {
            return write!(f, "cart document is consistent");
        }
        write!(f, "{} consistency issue(s):", self.issues.len())?;
        for (i, issue) in self.issues.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

/// Check a cart document on its own: required fields, id shape, positive
/// amounts and the declared total.
pub fn check_document(document: &CartDocument, tolerance: f64) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    for (index, item) in document.items.iter().enumerate() {
        match &item.id {
            None => report.push(ConsistencyIssue::MissingField {
                item: index,
                field: ItemField::Id,
            }),
            Some(id) if !is_uuid_v4(id) => report.push(ConsistencyIssue::InvalidId {
                item: index,
                id: id.clone(),
            }),
            Some(_) => {}
        }

        if item.name.is_none() {
            report.push(ConsistencyIssue::MissingField {
                item: index,
                field: ItemField::Name,
            });
        }

        for (field, value) in [
            (ItemField::Price, item.price),
            (ItemField::Quantity, item.quantity),
        ] {
            match value {
                None => report.push(ConsistencyIssue::MissingField { item: index, field }),
                Some(value) if value <= 0.0 => report.push(ConsistencyIssue::NonPositive {
                    item: index,
                    field,
                    value,
                }),
                Some(_) => {}
            }
        }
    }

    let computed = calc_total(&document.items);
    match document.total {
        None => report.push(ConsistencyIssue::MissingTotal),
        Some(declared) if !amounts_match(declared, computed, tolerance) => {
            report.push(ConsistencyIssue::TotalMismatch { declared, computed })
        }
        Some(_) => {}
    }

    debug!(issues = report.len(), "Checked cart document");
    report
}

/// Compare a cart document with a freshly parsed cart, ignoring ids
pub fn compare_with_cart(
    document: &CartDocument,
    cart: &ParsedCart,
    tolerance: f64,
) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    if document.items.len() != cart.items.len() {
        report.push(ConsistencyIssue::ItemCountMismatch {
            expected: cart.items.len(),
            actual: document.items.len(),
        });
    }

    for (index, (actual, expected)) in document.items.iter().zip(&cart.items).enumerate() {
        if actual.name.as_deref() != Some(expected.name.as_str()) {
            report.push(ConsistencyIssue::ItemMismatch {
                item: index,
                field: ItemField::Name,
                expected: expected.name.clone(),
                actual: describe(actual.name.as_deref()),
            });
        }

        for (field, expected_value, actual_value) in [
            (ItemField::Price, expected.price, actual.price),
            (ItemField::Quantity, expected.quantity, actual.quantity),
        ] {
            let matches = actual_value
                .is_some_and(|value| amounts_match(value, expected_value, tolerance));
            if !matches {
                report.push(ConsistencyIssue::ItemMismatch {
                    item: index,
                    field,
                    expected: expected_value.to_string(),
                    actual: describe(actual_value),
                });
            }
        }
    }

    match document.total {
        Some(declared) if amounts_match(declared, cart.total, tolerance) => {}
        Some(declared) => report.push(ConsistencyIssue::TotalMismatch {
            declared,
            computed: cart.total,
        }),
        None => report.push(ConsistencyIssue::MissingTotal),
    }

    debug!(issues = report.len(), "Compared cart document with parsed cart");
    report
}

fn describe<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "nothing".to_string())
}
