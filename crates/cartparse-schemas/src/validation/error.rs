//! Validation error types for cart documents
//!
//! Copyright (c) 2025 Cartparse Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Which rule family produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Header cell does not match the schema column name
    Header,
    /// Data row has the wrong number of cells
    Row,
    /// Data cell violates its column rule
    Cell,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Header => write!(f, "header"),
            ErrorKind::Row => write!(f, "row"),
            ErrorKind::Cell => write!(f, "cell"),
        }
    }
}

/// A single violation with its position in the document.
///
/// Serializes as `{ "type", "row", "column", "message" }` where a row-level
/// error carries `column: -1`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Rule family
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    /// 0-based row index, the header is row 0
    pub row: usize,
    /// 0-based cell index, `None` when the whole row is at fault
    #[serde(with = "column_index")]
    pub column: Option<usize>,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(
                f,
                "{} error at row {}, column {}: {}",
                self.kind, self.row, column, self.message
            ),
            None => write!(f, "{} error at row {}: {}", self.kind, self.row, self.message),
        }
    }
}

impl ValidationError {
    /// Header mismatch at `column`; `received` is `None` when the cell is missing
    pub fn header(column: usize, expected: &str, received: Option<&str>) -> Self {
        Self {
            kind: ErrorKind::Header,
            row: 0,
            column: Some(column),
            message: format!(
                "Expected header to be named \"{}\" but received {}.",
                expected,
                received.unwrap_or("undefined")
            ),
        }
    }

    /// Wrong cell count for a data row
    pub fn row_shape(row: usize, expected: usize, received: usize) -> Self {
        Self {
            kind: ErrorKind::Row,
            row,
            column: None,
            message: format!(
                "Expected row to have {} cells but received {}.",
                expected, received
            ),
        }
    }

    /// Empty cell in a string-nonempty column
    pub fn empty_string(row: usize, column: usize, received: &str) -> Self {
        Self {
            kind: ErrorKind::Cell,
            row,
            column: Some(column),
            message: format!(
                "Expected cell to be a nonempty string but received \"{}\".",
                received
            ),
        }
    }

    /// Unparsable or non-positive cell in a positive-number column
    pub fn not_positive(row: usize, column: usize, received: &str) -> Self {
        Self {
            kind: ErrorKind::Cell,
            row,
            column: Some(column),
            message: format!(
                "Expected cell to be a positive number but received \"{}\".",
                received
            ),
        }
    }

    /// True for errors that apply to a whole row rather than a cell
    pub fn is_row_level(&self) -> bool {
        self.column.is_none()
    }
}

/// `Option<usize>` <-> integer column, `-1` standing for "whole row"
mod column_index {
    use super::*;

    pub fn serialize<S>(column: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match column {
            Some(index) => serializer.serialize_i64(*index as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        match raw {
            -1 => Ok(None),
            index if index >= 0 => Ok(Some(index as usize)),
            other => Err(serde::de::Error::custom(format!(
                "column must be -1 or a non-negative index, got {}",
                other
            ))),
        }
    }
}

/// Ordered collection of every violation found in a document
#[derive(Debug, Clone, PartialEq, Eq, Default, Error, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Errors in discovery order
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document failed validation with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Append an error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate errors in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Number of errors of the given kind
    pub fn count_kind(&self, kind: ErrorKind) -> usize {
        self.errors.iter().filter(|e| e.kind == kind).count()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Unwrap into the plain list
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
