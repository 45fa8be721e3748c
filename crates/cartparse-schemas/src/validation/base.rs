//! Base validation trait and common utilities
//!
//! Copyright (c) 2025 Cartparse Team
//! Licensed under the Apache-2.0 license

use crate::schema::{ColumnDefinition, ColumnKind};
use crate::validation::error::{ValidationError, ValidationErrors};
use crate::validation::ValidationConfig;
use regex::Regex;
use std::sync::OnceLock;

static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn decimal_regex() -> &'static Regex {
    DECIMAL_REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("decimal pattern is valid")
    })
}

/// Base trait for document validators
pub trait DocumentValidator {
    /// Validate raw document text, collecting every violation in discovery order.
    ///
    /// An empty result means the document is valid.
    fn validate(&self, text: &str) -> Vec<ValidationError> {
        self.validate_with_config(text, &ValidationConfig::default())
    }

    /// Validate with explicit limits
    fn validate_with_config(&self, text: &str, config: &ValidationConfig) -> Vec<ValidationError>;

    /// Validate and wrap the outcome as a result
    fn check(&self, text: &str) -> Result<(), ValidationErrors> {
        ValidationErrors::from(self.validate(text)).into_result()
    }
}

/// Helper functions for the per-cell rules
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Parse a locale-free decimal string.
    ///
    /// Accepts an optional sign, digits and at most one `.`; rejects exponents,
    /// `inf`/`NaN`, separators and surrounding whitespace. Values beyond the
    /// `f64` range are rejected too, so an overflowing price or quantity is
    /// reported as not a positive number.
    pub fn parse_decimal(cell: &str) -> Option<f64> {
        if !decimal_regex().is_match(cell) {
            return None;
        }
        // Out-of-range digit strings parse to infinity
        cell.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    /// True when `cell` parses as a decimal strictly greater than zero
    pub fn is_positive_number(cell: &str) -> bool {
        Self::parse_decimal(cell).is_some_and(|value| value > 0.0)
    }

    /// True when `cell` has content once trimmed
    pub fn is_nonempty_string(cell: &str) -> bool {
        !cell.trim().is_empty()
    }

    /// Check one data cell against its column rule
    pub fn check_cell(
        column: &ColumnDefinition,
        row: usize,
        index: usize,
        cell: &str,
    ) -> Option<ValidationError> {
        match column.kind {
            ColumnKind::StringNonempty if !Self::is_nonempty_string(cell) => {
                Some(ValidationError::empty_string(row, index, cell))
            }
            ColumnKind::PositiveNumber if !Self::is_positive_number(cell) => {
                Some(ValidationError::not_positive(row, index, cell))
            }
            _ => None,
        }
    }
}
